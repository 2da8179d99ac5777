// Per-language checker seam

use polyspell_core::{LanguageCode, LoadError};

/// An initialized checker for one language.
///
/// Each loaded dictionary owns its checker exclusively; the set never shares
/// a checker between languages.
pub trait Checker: Send + Sync {
    /// Whether `term` is a valid word in this language.
    fn check(&self, term: &str) -> bool;

    /// Ranked corrections for `term`, best first.
    fn suggest(&self, term: &str) -> Vec<String>;
}

/// Builds checkers from raw affix and dictionary payloads.
///
/// Parsing may be expensive; the set runs `build` on the blocking pool.
pub trait CheckerEngine: Send + Sync {
    /// Construct a checker. Payloads the engine cannot parse must be
    /// reported as [`LoadError::MalformedDictionary`].
    fn build(
        &self,
        code: &LanguageCode,
        affix: &[u8],
        dictionary: &[u8],
    ) -> Result<Box<dyn Checker>, LoadError>;
}
