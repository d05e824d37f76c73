//! # String Utilities

/// Decode UTF-8, silently dropping malformed sequences.
///
/// Unlike [`String::from_utf8_lossy`], no replacement characters are
/// inserted; invalid bytes simply do not appear in the output.
pub fn string_from_utf8_ignore(v: &[u8]) -> String {
    if let Ok(s) = core::str::from_utf8(v) {
        return s.to_string();
    }

    let mut buf = String::with_capacity(v.len());
    for chunk in v.utf8_chunks() {
        buf.push_str(chunk.valid());
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_utf8_ignore() {
        let v = vec![0x61, 0x62, 0xff, 0x28];
        assert_eq!(string_from_utf8_ignore(&v), "ab(");

        let v = vec![0x61, 0x62];
        assert_eq!(string_from_utf8_ignore(&v), "ab");

        assert_eq!(string_from_utf8_ignore(&[]), "");
    }

    #[test]
    fn test_truncated_multibyte() {
        // "é" is 0xC3 0xA9; drop the trailing byte.
        let v = vec![b'c', b'a', b'f', 0xC3];
        assert_eq!(string_from_utf8_ignore(&v), "caf");

        // A lone continuation byte between valid text.
        let v = vec![b'x', 0xA9, b'y'];
        assert_eq!(string_from_utf8_ignore(&v), "xy");
    }
}
