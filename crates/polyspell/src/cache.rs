// Hash-based cache of check verdicts for short terms
//
// Meant for front ends that check the same words over and over (inline
// highlighting). The cache must be cleared on every
// `DictionaryEvent::VerdictsInvalidated`.

use polyspell_core::CheckResult;

use crate::set::DictionarySet;

/// Maximum term length (in chars) that can be cached.
const MAX_CACHED_WORD_LEN: usize = 10;

/// Largest accepted `size_param`; the biggest table then has 2^15 slots.
pub const MAX_SIZE_PARAM: u32 = 8;

/// Hash bits for each term length (index 0 unused).
const HASH_ORDERS: [u32; MAX_CACHED_WORD_LEN + 1] = [0, 3, 5, 6, 7, 7, 7, 7, 7, 7, 7];

fn term_hash(word: &[char], order: u32) -> usize {
    let mut hash: u32 = 0;
    for &ch in word {
        hash = hash.wrapping_mul(37).wrapping_add(ch as u32) % (1 << order);
    }
    hash as usize
}

#[derive(Clone)]
struct Slot {
    word: Vec<char>,
    correct: bool,
}

/// A fixed-size cache of definitive `check` verdicts.
///
/// Terms of 1 to 10 characters get a slot chosen by hash; a collision
/// silently replaces the previous occupant. `NotReady` is never stored.
pub struct VerdictCache {
    size_param: u32,
    /// One table per term length, `tables[len - 1]`.
    tables: Vec<Vec<Option<Slot>>>,
}

impl Default for VerdictCache {
    fn default() -> Self {
        Self::new(0)
    }
}

impl VerdictCache {
    /// `size_param` scales every table by `2^size_param`, up to
    /// [`MAX_SIZE_PARAM`].
    pub fn new(size_param: u32) -> Self {
        let size_param = size_param.min(MAX_SIZE_PARAM);
        let tables = (1..=MAX_CACHED_WORD_LEN)
            .map(|len| vec![None; 1 << (HASH_ORDERS[len] + size_param)])
            .collect();
        Self { size_param, tables }
    }

    fn index(&self, word: &[char]) -> Option<(usize, usize)> {
        let len = word.len();
        if len == 0 || len > MAX_CACHED_WORD_LEN {
            return None;
        }
        Some((len - 1, term_hash(word, HASH_ORDERS[len] + self.size_param)))
    }

    pub fn get(&self, term: &str) -> Option<CheckResult> {
        let word: Vec<char> = term.chars().collect();
        let (table, slot) = self.index(&word)?;
        match &self.tables[table][slot] {
            Some(entry) if entry.word == word => Some(if entry.correct {
                CheckResult::Correct
            } else {
                CheckResult::Incorrect
            }),
            _ => None,
        }
    }

    /// Store a verdict. `NotReady` and long terms are ignored.
    pub fn insert(&mut self, term: &str, result: CheckResult) {
        if !result.is_definitive() {
            return;
        }
        let word: Vec<char> = term.chars().collect();
        if let Some((table, slot)) = self.index(&word) {
            self.tables[table][slot] = Some(Slot {
                word,
                correct: result.is_correct(),
            });
        }
    }

    /// Drop every cached verdict.
    pub fn invalidate(&mut self) {
        for table in &mut self.tables {
            table.iter_mut().for_each(|slot| *slot = None);
        }
    }

    /// Look a term up, asking `set` on a miss.
    pub fn check_with_cache(&mut self, term: &str, set: &DictionarySet) -> CheckResult {
        if let Some(result) = self.get(term) {
            return result;
        }
        let result = set.check(term);
        self.insert(term, result);
        result
    }
}
