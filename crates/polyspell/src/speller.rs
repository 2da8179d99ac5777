// Low-level speller seam used by the suggestion generators

use polyspell_core::SpellResult;

/// Validates suggestion candidates.
///
/// Candidates are built as `char` buffers by the edit generators, so the
/// lookup takes them as a slice rather than a `&str`.
pub trait Speller {
    fn spell(&self, word: &[char]) -> SpellResult;
}
