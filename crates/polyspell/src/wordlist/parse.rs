// Hunspell-style .aff / .dic readers (word list subset)
//
// Only the parts a plain word-list checker needs are read: the dictionary
// stems and the affix file's SET, TRY and REP directives. Affix rules and
// flags are skipped.

use hashbrown::HashSet;
use polyspell_core::{LanguageCode, LoadError};

/// Suggestion tables read from an affix file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AffixInfo {
    /// `TRY` characters, in file order.
    pub try_chars: Vec<char>,
    /// Single-character `REP` pairs, `(from, to)`.
    pub replacements: Vec<(char, char)>,
    /// Number of `SFX` / `PFX` rule lines. These are not applied.
    pub affix_rules: usize,
}

fn as_utf8<'a>(code: &LanguageCode, bytes: &'a [u8], what: &str) -> Result<&'a str, LoadError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    std::str::from_utf8(bytes)
        .map_err(|e| LoadError::malformed(code, format!("{what} is not valid UTF-8: {e}")))
}

/// Parse the subset of an affix file used for suggestions.
pub fn parse_affix(code: &LanguageCode, bytes: &[u8]) -> Result<AffixInfo, LoadError> {
    let text = as_utf8(code, bytes, "affix file")?;
    let mut info = AffixInfo::default();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("SET") => {
                let encoding = fields.next().unwrap_or_default();
                if !encoding.eq_ignore_ascii_case("UTF-8") {
                    return Err(LoadError::malformed(
                        code,
                        format!("unsupported encoding {encoding:?}"),
                    ));
                }
            }
            Some("TRY") => {
                if let Some(chars) = fields.next() {
                    info.try_chars = chars.chars().collect();
                }
            }
            Some("REP") => {
                // `REP <count>` header lines have one field; entries have two.
                if let (Some(from), Some(to)) = (fields.next(), fields.next()) {
                    let (mut f, mut t) = (from.chars(), to.chars());
                    if let (Some(fc), None, Some(tc), None) = (f.next(), f.next(), t.next(), t.next()) {
                        info.replacements.push((fc, tc));
                    }
                }
            }
            Some("SFX" | "PFX") => info.affix_rules += 1,
            _ => {}
        }
    }

    Ok(info)
}

/// Parse a dictionary file into its set of stems.
///
/// The first non-empty line must be the approximate word count. Every other
/// line is `word[/flags][<tab or space>morphological fields]`; a `/` escaped
/// as `\/` stays part of the word.
pub fn parse_dictionary(code: &LanguageCode, bytes: &[u8]) -> Result<HashSet<String>, LoadError> {
    let text = as_utf8(code, bytes, "dictionary file")?;
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines
        .next()
        .ok_or_else(|| LoadError::malformed(code, "dictionary file is empty"))?;
    let expected: usize = header
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| LoadError::malformed(code, format!("missing word count, found {header:?}")))?;

    // The count is untrusted: never reserve more than one slot per line.
    let mut words = HashSet::with_capacity(expected.min(text.lines().count()));
    for line in lines {
        if let Some(word) = stem_of(line) {
            words.insert(word);
        }
    }
    Ok(words)
}

fn stem_of(line: &str) -> Option<String> {
    let entry = line.split(['\t', ' ']).next().unwrap_or(line);
    let mut word = String::with_capacity(entry.len());
    let mut chars = entry.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(next) => word.push(next),
                None => word.push('\\'),
            },
            '/' => break,
            _ => word.push(c),
        }
    }
    (!word.is_empty()).then_some(word)
}
