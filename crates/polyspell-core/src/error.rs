// Per-language load failures

use std::path::PathBuf;

use crate::enums::ResolutionStatus;
use crate::language::LanguageCode;

/// Reasons a single dictionary could not be loaded.
///
/// None of these are fatal: the aggregator logs them and skips the language.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No exact dictionary match for the code.
    #[error("no exact dictionary for {code} (resolution: {status:?})")]
    ResourceUnavailable {
        code: LanguageCode,
        status: ResolutionStatus,
    },

    /// The affix or dictionary payload could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload was read but the checker engine rejected it.
    #[error("malformed dictionary for {code}: {reason}")]
    MalformedDictionary { code: LanguageCode, reason: String },
}

impl LoadError {
    pub fn malformed(code: &LanguageCode, reason: impl Into<String>) -> Self {
        LoadError::MalformedDictionary {
            code: code.clone(),
            reason: reason.into(),
        }
    }
}
