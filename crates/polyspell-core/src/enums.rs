// Shared enums: CheckResult, SpellResult, ResolutionStatus

use serde::Serialize;

/// Aggregate verdict returned by a dictionary set for one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckResult {
    /// At least one loaded dictionary accepts the term, or no dictionaries
    /// are active at all.
    Correct,
    /// Every loaded dictionary rejects the term.
    Incorrect,
    /// The loaded set has not caught up with the desired set yet.
    ///
    /// Callers must not treat this as a misspelling: do not underline the
    /// word and do not persist it as a correction.
    NotReady,
}

impl CheckResult {
    /// Returns `true` for real spelling verdicts (`Correct` / `Incorrect`).
    pub fn is_definitive(self) -> bool {
        !matches!(self, CheckResult::NotReady)
    }

    /// Returns `true` only for `Correct`.
    pub fn is_correct(self) -> bool {
        matches!(self, CheckResult::Correct)
    }
}

/// Per-engine spell result, used while generating suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// Word is correctly spelled.
    Ok,
    /// Word is correct if the first letter is capitalized.
    CapitalizeFirst,
    /// Word is misspelled.
    Failed,
}

/// Outcome of resolving a language code to dictionary files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolutionStatus {
    /// Files for exactly the requested code were found.
    Exact,
    /// Only a related dictionary (same primary language) was found.
    Fuzzy,
    /// Nothing usable was found.
    None,
}
