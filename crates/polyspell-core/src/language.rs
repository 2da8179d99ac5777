// Language code newtype

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a dictionary language, e.g. `en_GB`.
///
/// Codes are compared by exact value; `en_GB` and `en-GB` are different
/// dictionaries as far as the set is concerned. [`LanguageCode::language`]
/// gives the primary subtag for looser matching by resource loaders.
///
/// Deserialized codes are validated like [`FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

/// Error returned when parsing an invalid language code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeError {
    #[error("language code is empty")]
    Empty,
    #[error("language code contains whitespace: {0:?}")]
    Whitespace(String),
    /// Codes name files on disk, so they cannot leave the directory.
    #[error("language code is not a plain file stem: {0:?}")]
    NotAStem(String),
}

impl LanguageCode {
    /// Wrap a code without validation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag: `en` for `en_GB`, `en-GB` or `en`.
    pub fn language(&self) -> &str {
        self.0
            .split(['_', '-'])
            .next()
            .unwrap_or(self.0.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = LanguageCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LanguageCodeError::Empty);
        }
        if s.chars().any(char::is_whitespace) {
            return Err(LanguageCodeError::Whitespace(s.to_string()));
        }
        if s.starts_with('.') || s.contains(['/', '\\']) {
            return Err(LanguageCodeError::NotAStem(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = LanguageCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_subtag_underscore() {
        assert_eq!(LanguageCode::new("en_GB").language(), "en");
    }

    #[test]
    fn language_subtag_hyphen() {
        assert_eq!(LanguageCode::new("pt-BR").language(), "pt");
    }

    #[test]
    fn language_subtag_bare() {
        assert_eq!(LanguageCode::new("fi").language(), "fi");
    }

    #[test]
    fn parse_trims_and_validates() {
        assert_eq!("  de_DE ".parse::<LanguageCode>().unwrap().as_str(), "de_DE");
        assert_eq!("".parse::<LanguageCode>(), Err(LanguageCodeError::Empty));
        assert!(matches!(
            "en GB".parse::<LanguageCode>(),
            Err(LanguageCodeError::Whitespace(_))
        ));
    }

    #[test]
    fn parse_rejects_paths() {
        for bad in ["../x", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(bad.parse::<LanguageCode>(), Err(LanguageCodeError::NotAStem(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<LanguageCode>("\"\"").is_err());
        assert!(serde_json::from_str::<LanguageCode>("\"../x\"").is_err());
        assert!(serde_json::from_str::<LanguageCode>("\"en GB\"").is_err());
    }

    #[test]
    fn serde_is_a_plain_string() {
        let code = LanguageCode::new("en_GB");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"en_GB\"");
        let back: LanguageCode = serde_json::from_str("\"sv_SE\"").unwrap();
        assert_eq!(back, LanguageCode::new("sv_SE"));
    }

    #[test]
    fn codes_compare_by_value() {
        assert_eq!(LanguageCode::from("en_GB"), LanguageCode::new(String::from("en_GB")));
        assert_ne!(LanguageCode::from("en_GB"), LanguageCode::from("en-GB"));
    }
}
