// Candidate collection for one misspelled term

use hashbrown::HashSet;
use polyspell_core::SpellResult;
use polyspell_core::character::simple_upper;

use crate::speller::Speller;

/// Candidates gathered per requested suggestion, so that ranking can still
/// promote a good correction found late in the pipeline.
const OVERCOLLECT: usize = 3;

/// Speller-validated corrections for one term, collected under a budget.
///
/// Every [`offer`](Self::offer) costs one speller lookup. Collection is done
/// once `OVERCOLLECT * wanted` corrections are found or the budget is spent;
/// while nothing has been found the budget stretches to twice its size.
pub struct Candidates<'a> {
    term: &'a [char],
    wanted: usize,
    budget: usize,
    spent: usize,
    found: Vec<(String, u32)>,
    seen: HashSet<String>,
}

impl<'a> Candidates<'a> {
    pub fn new(term: &'a [char], wanted: usize, budget: usize) -> Self {
        Self {
            term,
            wanted,
            budget,
            spent: 0,
            found: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// The misspelled term. Borrowed from the caller, not from `self`.
    pub fn term(&self) -> &'a [char] {
        self.term
    }

    pub fn has_any(&self) -> bool {
        !self.found.is_empty()
    }

    pub fn is_done(&self) -> bool {
        if self.found.len() >= self.wanted.saturating_mul(OVERCOLLECT) {
            return true;
        }
        let limit = if self.found.is_empty() {
            self.budget.saturating_mul(2)
        } else {
            self.budget
        };
        self.spent >= limit
    }

    /// Look `candidate` up and keep it if the speller accepts it, restoring
    /// the initial capital when the dictionary wants one.
    pub fn offer(&mut self, speller: &dyn Speller, candidate: &[char]) {
        if candidate.is_empty() || self.is_done() {
            return;
        }
        self.spent += 1;
        let (word, weight) = match speller.spell(candidate) {
            SpellResult::Failed => return,
            SpellResult::Ok => (candidate.iter().collect::<String>(), 1),
            SpellResult::CapitalizeFirst => {
                let mut chars = candidate.iter().copied();
                let first = chars.next().map(simple_upper);
                (first.into_iter().chain(chars).collect(), 2)
            }
        };
        if !self.seen.insert(word.clone()) {
            return;
        }
        // Later finds come from costlier edits.
        let rank = weight * (self.found.len() as u32 + 5);
        self.found.push((word, rank));
    }

    /// The best `wanted` corrections, best first. The term itself is never
    /// returned; equal ranks keep discovery order.
    pub fn into_ranked(mut self) -> Vec<String> {
        let term: String = self.term.iter().collect();
        self.found.sort_by_key(|&(_, rank)| rank);
        self.found
            .into_iter()
            .map(|(word, _)| word)
            .filter(|word| *word != term)
            .take(self.wanted)
            .collect()
    }
}
