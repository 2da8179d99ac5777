// Generator pipeline for one dictionary

use super::candidates::Candidates;
use super::generators::{CaseChange, Deletion, Insertion, Replacement, Swap, SuggestionGenerator};
use crate::speller::Speller;

/// Speller lookups allowed per suggested term.
pub const DEFAULT_MAX_COST: usize = 800;

/// Insertion letters for dictionaries without a `TRY` line.
pub const DEFAULT_TRY_CHARS: &str = "esianrtolcdugmphbyfvkwzxjq'-";

/// Generators in two tiers: `first` runs alone if it finds anything,
/// `fallback` only otherwise.
pub struct SuggestionStrategy {
    budget: usize,
    first: Vec<Box<dyn SuggestionGenerator>>,
    fallback: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(
        budget: usize,
        first: Vec<Box<dyn SuggestionGenerator>>,
        fallback: Vec<Box<dyn SuggestionGenerator>>,
    ) -> Self {
        Self {
            budget,
            first,
            fallback,
        }
    }

    /// Up to `wanted` corrections for `term`, best first.
    pub fn suggest(&self, speller: &dyn Speller, term: &[char], wanted: usize) -> Vec<String> {
        let mut candidates = Candidates::new(term, wanted, self.budget);
        self.run(speller, &mut candidates);
        candidates.into_ranked()
    }

    pub fn run(&self, speller: &dyn Speller, candidates: &mut Candidates<'_>) {
        run_tier(&self.first, speller, candidates);
        if !candidates.has_any() {
            run_tier(&self.fallback, speller, candidates);
        }
    }

    pub fn budget(&self) -> usize {
        self.budget
    }
}

fn run_tier(
    generators: &[Box<dyn SuggestionGenerator>],
    speller: &dyn Speller,
    candidates: &mut Candidates<'_>,
) {
    for generator in generators {
        if candidates.is_done() {
            break;
        }
        generator.generate(speller, candidates);
    }
}

/// Typing-error pipeline from a dictionary's own tables: case first, then
/// `REP` substitutions, deletions, swaps and `TRY` insertions.
pub fn typing_strategy(
    budget: usize,
    replacements: Vec<(char, char)>,
    try_chars: Vec<char>,
) -> SuggestionStrategy {
    let mut fallback: Vec<Box<dyn SuggestionGenerator>> = Vec::new();
    if !replacements.is_empty() {
        fallback.push(Box::new(Replacement {
            pairs: replacements,
        }));
    }
    fallback.push(Box::new(Deletion));
    fallback.push(Box::new(Swap));
    fallback.push(Box::new(Insertion { letters: try_chars }));

    SuggestionStrategy::new(budget, vec![Box::new(CaseChange)], fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyspell_core::SpellResult;

    struct Accepts(Vec<&'static str>);

    impl Speller for Accepts {
        fn spell(&self, word: &[char]) -> SpellResult {
            let word: String = word.iter().collect();
            if self.0.contains(&word.as_str()) {
                SpellResult::Ok
            } else {
                SpellResult::Failed
            }
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn default_strategy() -> SuggestionStrategy {
        typing_strategy(DEFAULT_MAX_COST, Vec::new(), DEFAULT_TRY_CHARS.chars().collect())
    }

    #[test]
    fn correct_term_stops_after_first_tier() {
        // "hell" would be a deletion, but the term itself already passed.
        let speller = Accepts(vec!["hello", "hell"]);
        let term = chars("hello");
        let mut candidates = Candidates::new(&term, 5, DEFAULT_MAX_COST);
        default_strategy().run(&speller, &mut candidates);
        assert!(candidates.into_ranked().is_empty());
    }

    #[test]
    fn finds_deletion_swap_and_insertion() {
        let speller = Accepts(vec!["hello", "world", "cats"]);
        for (typo, fix) in [("helllo", "hello"), ("wrold", "world"), ("cts", "cats")] {
            let found = default_strategy().suggest(&speller, &chars(typo), 5);
            assert!(found.iter().any(|s| s == fix), "{typo} should suggest {fix}");
        }
    }

    #[test]
    fn replacement_table_ranks_first() {
        let speller = Accepts(vec!["phone", "phon"]);
        let strategy = typing_strategy(DEFAULT_MAX_COST, vec![('f', 'p')], vec![]);
        assert_eq!(strategy.suggest(&speller, &chars("fhone"), 5)[0], "phone");
    }

    #[test]
    fn returns_at_most_wanted() {
        let speller = Accepts(vec!["ab", "ac", "ad", "ae"]);
        assert_eq!(default_strategy().suggest(&speller, &chars("a"), 2).len(), 2);
    }

    #[test]
    fn small_budget_gives_up() {
        let speller = Accepts(vec!["abcdefghijklmnopz"]);
        let strategy = typing_strategy(10, Vec::new(), DEFAULT_TRY_CHARS.chars().collect());
        assert!(strategy.suggest(&speller, &chars("abcdefghijklmnop"), 5).is_empty());
        assert_eq!(strategy.budget(), 10);
    }
}
