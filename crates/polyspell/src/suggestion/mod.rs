// Suggestion generation
//
// Correction candidates for a misspelled term come from edit operations
// (case change, replacement, deletion, swap, insertion). Each candidate is
// validated through a `Speller` and ranked by how early it was found.
//
//   - `candidates`: the per-term collector (budget, dedup, ranking)
//   - `generators`: one edit operation each
//   - `strategy`: the two-tier pipeline a dictionary runs

pub mod candidates;
pub mod generators;
pub mod strategy;

pub use candidates::Candidates;
pub use generators::SuggestionGenerator;
pub use strategy::{DEFAULT_MAX_COST, DEFAULT_TRY_CHARS, SuggestionStrategy, typing_strategy};
