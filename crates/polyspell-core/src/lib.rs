//! Shared, I/O-free types for polyspell.
//!
//! Everything here is used by both the aggregator crate and its front ends:
//! language codes, verdict enums, the per-language load error taxonomy and a
//! few character helpers for the suggestion generators.

pub mod character;
pub mod enums;
pub mod error;
pub mod language;

pub use enums::{CheckResult, ResolutionStatus, SpellResult};
pub use error::LoadError;
pub use language::LanguageCode;
