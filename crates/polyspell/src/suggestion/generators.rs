// Edit-operation generators. Each one derives candidate spellings from the
// misspelled term and offers them to the collector.

use polyspell_core::character::{simple_lower, simple_upper};

use super::candidates::Candidates;
use crate::speller::Speller;

pub trait SuggestionGenerator: Send + Sync {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>);
}

fn same_letter(a: char, b: char) -> bool {
    simple_lower(a) == simple_lower(b)
}

/// The term unchanged: catches words that only need a capital.
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        let term = candidates.term();
        candidates.offer(speller, term);
    }
}

/// Drop one letter. Within a run of equal letters only the first position
/// is tried.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        let term = candidates.term();
        if term.len() < 2 {
            return;
        }
        let mut buf = Vec::with_capacity(term.len() - 1);
        for at in 0..term.len() {
            if candidates.is_done() {
                return;
            }
            if at > 0 && same_letter(term[at], term[at - 1]) {
                continue;
            }
            buf.clear();
            buf.extend_from_slice(&term[..at]);
            buf.extend_from_slice(&term[at + 1..]);
            candidates.offer(speller, &buf);
        }
    }
}

/// Add one letter from `letters` (the dictionary's `TRY` line, most
/// frequent first) at every position.
pub struct Insertion {
    pub letters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        let term = candidates.term();
        if term.is_empty() {
            return;
        }
        let mut buf = Vec::with_capacity(term.len() + 1);
        for &letter in &self.letters {
            for at in 0..=term.len() {
                if candidates.is_done() {
                    return;
                }
                // Doubling a letter: inserting after it gives the same word.
                if at < term.len() && letter == simple_lower(term[at]) {
                    continue;
                }
                buf.clear();
                buf.extend_from_slice(&term[..at]);
                buf.push(letter);
                buf.extend_from_slice(&term[at..]);
                candidates.offer(speller, &buf);
            }
        }
    }
}

/// Substitute single letters from the dictionary's `REP` table, one
/// occurrence at a time. Capitalized occurrences get a capitalized
/// replacement.
pub struct Replacement {
    pub pairs: Vec<(char, char)>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        let term = candidates.term();
        let mut buf = term.to_vec();
        for &(from, to) in &self.pairs {
            let upper = (simple_upper(from), simple_upper(to));
            let variants = std::iter::once((from, to)).chain((upper.0 != from).then_some(upper));
            for (from, to) in variants {
                for at in 0..buf.len() {
                    if buf[at] != from {
                        continue;
                    }
                    buf[at] = to;
                    candidates.offer(speller, &buf);
                    buf[at] = from;
                    if candidates.is_done() {
                        return;
                    }
                }
            }
        }
    }
}

/// Exchange two letters. Short terms allow a distance up to 10; longer ones
/// shrink the window to `50 / len`.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        let term = candidates.term();
        let len = term.len();
        let window = if len <= 8 { 10 } else { 50 / len };
        let mut buf = term.to_vec();
        for i in 0..len {
            for j in (i + 1)..len.min(i + window + 1) {
                if candidates.is_done() {
                    return;
                }
                if same_letter(term[i], term[j]) {
                    continue;
                }
                buf.swap(i, j);
                candidates.offer(speller, &buf);
                buf.swap(i, j);
            }
        }
    }
}
