use std::io::{BufRead, Write};

use seqvocab::{ByteVocabulary, TokenId, Vocabulary};

use crate::input_output::{InputArgs, OutputArgs};

/// The codec mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CodecMode {
    Encode,
    Decode,
}

/// Mode selection for the codec.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct CodecModeArgs {
    /// Encode from text to ids.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from ids to text.
    #[arg(long, action=clap::ArgAction::SetTrue)]
    decode: bool,
}

impl CodecModeArgs {
    /// Get the codec mode.
    pub fn mode(&self) -> CodecMode {
        if self.encode {
            CodecMode::Encode
        } else {
            CodecMode::Decode
        }
    }
}

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    mode: CodecModeArgs,

    /// Number of extra (sentinel) ids.
    #[arg(long, default_value_t = 0)]
    extra_ids: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let vocab = ByteVocabulary::new(self.extra_ids);
        log::debug!("cat with {vocab:?}");

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.mode.mode() {
            CodecMode::Encode => run_cat_encode(&mut reader, &mut writer, &vocab)?,
            CodecMode::Decode => run_cat_decode(&mut reader, &mut writer, &vocab)?,
        }

        Ok(())
    }
}

fn run_cat_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    vocab: &dyn Vocabulary,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read lines, but keep the end-of-line characters.
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let ids = vocab.encode(&line);

        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
        writer.flush()?;

        line.clear();
    }
    Ok(())
}

fn run_cat_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    vocab: &dyn Vocabulary,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids = line?
            .split_whitespace()
            .map(|s| {
                s.parse::<TokenId>()
                    .map_err(|e| format!("invalid id {s:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        write!(writer, "{}", vocab.decode(&ids))?;
        writer.flush()?;
    }
    Ok(())
}
