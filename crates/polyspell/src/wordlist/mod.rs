// Built-in word-list checker engine
//
// Accepts words listed in a Hunspell-style .dic file and suggests
// corrections with the edit-operation pipeline. No affix expansion is done:
// a production deployment plugs a full engine in through `CheckerEngine`.

pub mod parse;

use hashbrown::HashSet;
use polyspell_core::character::{capitalize_first, is_all_upper, is_upper, lower_word};
use polyspell_core::{LanguageCode, LoadError, SpellResult};

use crate::engine::{Checker, CheckerEngine};
use crate::speller::Speller;
use crate::suggestion::strategy::{
    DEFAULT_MAX_COST, DEFAULT_TRY_CHARS, SuggestionStrategy, typing_strategy,
};

/// Default number of suggestions returned per word.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Builds [`WordListChecker`]s from `.aff` / `.dic` payloads.
#[derive(Debug, Clone, Copy)]
pub struct WordListEngine {
    max_suggestions: usize,
    max_cost: usize,
}

impl Default for WordListEngine {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_cost: DEFAULT_MAX_COST,
        }
    }
}

impl WordListEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn with_max_cost(mut self, max_cost: usize) -> Self {
        self.max_cost = max_cost;
        self
    }
}

impl CheckerEngine for WordListEngine {
    fn build(
        &self,
        code: &LanguageCode,
        affix: &[u8],
        dictionary: &[u8],
    ) -> Result<Box<dyn Checker>, LoadError> {
        let info = parse::parse_affix(code, affix)?;
        let words = parse::parse_dictionary(code, dictionary)?;
        tracing::debug!(%code, words = words.len(), "parsed word list");
        if info.affix_rules > 0 {
            tracing::warn!(
                %code,
                rules = info.affix_rules,
                "affix rules are not expanded; inflected forms will be rejected"
            );
        }

        let try_chars = if info.try_chars.is_empty() {
            DEFAULT_TRY_CHARS.chars().collect()
        } else {
            info.try_chars
        };
        Ok(Box::new(WordListChecker {
            words,
            strategy: typing_strategy(self.max_cost, info.replacements, try_chars),
            max_suggestions: self.max_suggestions,
        }))
    }
}

/// Checker over a flat set of accepted words.
pub struct WordListChecker {
    words: HashSet<String>,
    strategy: SuggestionStrategy,
    max_suggestions: usize,
}

impl WordListChecker {
    /// Build a checker directly from words, using default suggestion tables.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            strategy: typing_strategy(
                DEFAULT_MAX_COST,
                Vec::new(),
                DEFAULT_TRY_CHARS.chars().collect(),
            ),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn spell_str(&self, word: &str) -> SpellResult {
        if word.is_empty() {
            return SpellResult::Failed;
        }
        if self.words.contains(word) {
            return SpellResult::Ok;
        }
        // "Hello" and "HELLO" are fine when "hello" is listed; "HELLO" is
        // also fine when "Hello" is listed.
        let starts_upper = word.chars().next().is_some_and(is_upper);
        if starts_upper {
            let lower = lower_word(word);
            if self.words.contains(&lower) {
                return SpellResult::Ok;
            }
            if is_all_upper(word) && self.words.contains(&capitalize_first(&lower)) {
                return SpellResult::Ok;
            }
            return SpellResult::Failed;
        }
        if self.words.contains(&capitalize_first(word)) {
            return SpellResult::CapitalizeFirst;
        }
        SpellResult::Failed
    }
}

impl Speller for WordListChecker {
    fn spell(&self, word: &[char]) -> SpellResult {
        let word: String = word.iter().collect();
        self.spell_str(&word)
    }
}

impl Checker for WordListChecker {
    fn check(&self, term: &str) -> bool {
        self.spell_str(term) == SpellResult::Ok
    }

    fn suggest(&self, term: &str) -> Vec<String> {
        let chars: Vec<char> = term.chars().collect();
        self.strategy.suggest(self, &chars, self.max_suggestions)
    }
}
