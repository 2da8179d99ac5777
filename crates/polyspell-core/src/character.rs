// Simple case mapping helpers used by the checkers and suggestion generators

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Return `word` with its first character uppercased.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Lowercase every character with [`simple_lower`].
pub fn lower_word(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

/// True when the word has a letter and every letter in it is uppercase.
pub fn is_all_upper(word: &str) -> bool {
    let mut has_letter = false;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        has_letter = true;
        if !is_upper(c) {
            return false;
        }
    }
    has_letter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_and_upper_ascii() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_lower('1'), '1');
    }

    #[test]
    fn lower_and_upper_non_ascii() {
        assert_eq!(simple_lower('\u{00C4}'), '\u{00E4}');
        assert_eq!(simple_upper('\u{00F6}'), '\u{00D6}');
    }

    #[test]
    fn is_upper_detects_capitals() {
        assert!(is_upper('Q'));
        assert!(!is_upper('q'));
        assert!(!is_upper('-'));
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize_first("london"), "London");
        assert_eq!(capitalize_first("\u{00E4}iti"), "\u{00C4}iti");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn all_upper_needs_letters() {
        assert!(is_all_upper("NASA"));
        assert!(is_all_upper("R2D2"));
        assert!(!is_all_upper("Nasa"));
        assert!(!is_all_upper("123"));
    }

    #[test]
    fn lower_word_maps_every_char() {
        assert_eq!(lower_word("HeLLo"), "hello");
    }
}
