// Error types for the inflection core.

use thiserror::Error;

use crate::types::{Tense, WordCategory};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A category from one word family was paired with a descriptor or
    /// algorithm of the other.
    #[error("category '{category}' is not {expected}")]
    UnsupportedCategory {
        category: WordCategory,
        expected: &'static str,
    },

    #[error("て-form carries no tense, but tense '{tense}' was given")]
    IllegalDescriptorConstruction { tense: Tense },

    #[error("unknown word category tag '{0}'")]
    UnknownCategoryTag(String),

    #[error("vocabulary contains no words")]
    EmptyVocabulary,

    #[error("conjugation oracle failed for '{word}': {reason}")]
    Oracle { word: String, reason: String },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
