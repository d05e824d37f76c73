//! # Process Config Store
//!
//! A load-once, read-many home for the process [`VocabularyConfig`].
//!
//! The store is initialized at most once: either explicitly through
//! [`init_vocabulary_config`], or lazily from the environment on first read.
//! Nothing mutates it afterwards.

use once_cell::sync::OnceCell;

use crate::{
    VocabError,
    VocabResult,
    config::{SentencePieceVocabularySpec, VocabularyConfig},
};

/// Global vocabulary config.
static VOCABULARY_CONFIG: OnceCell<VocabularyConfig> = OnceCell::new();

/// Initialize the process vocabulary config.
///
/// ## Returns
/// * `Ok(config)` - the stored config.
/// * `Err(VocabError::ConfigAlreadyInitialized)` - if the store was
///   already initialized, explicitly or by an earlier read.
pub fn init_vocabulary_config(config: VocabularyConfig) -> VocabResult<&'static VocabularyConfig> {
    VOCABULARY_CONFIG
        .set(config)
        .map_err(|_| VocabError::ConfigAlreadyInitialized)?;

    let config = vocabulary_config();
    log::info!(
        "vocabulary config initialized: path={}, extra_ids={}",
        config.path,
        config.extra_ids
    );
    Ok(config)
}

/// Get the process vocabulary config.
///
/// Initializes the store from the environment on first use; a malformed
/// environment is logged and the defaults are used.
pub fn vocabulary_config() -> &'static VocabularyConfig {
    VOCABULARY_CONFIG.get_or_init(|| {
        VocabularyConfig::from_env().unwrap_or_else(|err| {
            log::warn!("ignoring vocabulary config environment: {err}");
            VocabularyConfig::default()
        })
    })
}

/// Resolve the subword model path.
///
/// ## Returns
/// `override_path` when present and non-empty; else the stored config path.
pub fn resolve_vocabulary_path(override_path: Option<&str>) -> String {
    vocabulary_config().resolve_path(override_path)
}

/// Describe the default subword vocabulary.
pub fn default_vocabulary() -> SentencePieceVocabularySpec {
    vocabulary_config().vocabulary_spec(None)
}
