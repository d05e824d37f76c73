//! # Vocabulary Config

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    VocabError,
    VocabResult,
    config::{DEFAULT_EXTRA_IDS, DEFAULT_SPM_PATH, SEQVOCAB_EXTRA_IDS, SEQVOCAB_VOCAB_PATH},
};

/// Descriptor for constructing a subword (SentencePiece) vocabulary.
///
/// The subword algorithm is external; this is what it is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePieceVocabularySpec {
    /// Path or URL of the model file.
    pub model_path: String,

    /// Number of extra ids to reserve.
    pub extra_ids: usize,
}

/// Configuration for the default subword vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyConfig {
    /// Path or URL of the model file.
    pub path: String,

    /// Number of extra ids to reserve.
    pub extra_ids: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SPM_PATH.to_string(),
            extra_ids: DEFAULT_EXTRA_IDS,
        }
    }
}

impl VocabularyConfig {
    /// Build a config from the defaults, overlaid with the environment.
    ///
    /// Reads ``$SEQVOCAB_VOCAB_PATH`` and ``$SEQVOCAB_EXTRA_IDS``;
    /// empty values are ignored.
    pub fn from_env() -> VocabResult<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var(SEQVOCAB_VOCAB_PATH)
            && !path.is_empty()
        {
            config.path = path;
        }

        if let Ok(extra_ids) = env::var(SEQVOCAB_EXTRA_IDS)
            && !extra_ids.is_empty()
        {
            config.extra_ids = parse_extra_ids(&extra_ids)?;
        }

        Ok(config)
    }

    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> VocabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> VocabResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        log::debug!("loaded vocabulary config from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Set the model path.
    pub fn with_path<S: Into<String>>(
        mut self,
        path: S,
    ) -> Self {
        self.path = path.into();
        self
    }

    /// Set the extra id count.
    pub fn with_extra_ids(
        mut self,
        extra_ids: usize,
    ) -> Self {
        self.extra_ids = extra_ids;
        self
    }

    /// Apply a single ``key=value`` binding.
    ///
    /// Known keys are ``path`` and ``extra_ids``. Values may be quoted.
    pub fn apply_binding(
        &mut self,
        binding: &str,
    ) -> VocabResult<()> {
        let Some((key, value)) = binding.split_once('=') else {
            return Err(VocabError::Config(format!(
                "binding {binding:?} is not of the form key=value"
            )));
        };
        let value = unquote(value.trim());

        match key.trim() {
            "path" => self.path = value.to_string(),
            "extra_ids" => self.extra_ids = parse_extra_ids(value)?,
            other => {
                return Err(VocabError::Config(format!("unknown config key {other:?}")));
            }
        }
        Ok(())
    }

    /// Apply a sequence of ``key=value`` bindings, in order.
    pub fn apply_bindings<I, S>(
        &mut self,
        bindings: I,
    ) -> VocabResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for binding in bindings {
            self.apply_binding(binding.as_ref())?;
        }
        Ok(())
    }

    /// Resolve the model path.
    ///
    /// ## Returns
    /// `override_path` when present and non-empty; else `self.path`.
    pub fn resolve_path(
        &self,
        override_path: Option<&str>,
    ) -> String {
        match override_path {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => self.path.clone(),
        }
    }

    /// Describe the subword vocabulary this config selects.
    pub fn vocabulary_spec(
        &self,
        override_path: Option<&str>,
    ) -> SentencePieceVocabularySpec {
        SentencePieceVocabularySpec {
            model_path: self.resolve_path(override_path),
            extra_ids: self.extra_ids,
        }
    }
}

fn parse_extra_ids(value: &str) -> VocabResult<usize> {
    value
        .trim()
        .parse()
        .map_err(|e| VocabError::Config(format!("invalid extra_ids {value:?}: {e}")))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
