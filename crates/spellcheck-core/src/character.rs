// Character classification and case folding

/// The apostrophe is the only non-letter accepted inside a word.
pub const APOSTROPHE: char = '\'';

/// Check whether a character may appear inside a word token.
///
/// Letters (any Unicode alphabetic character) and the ASCII apostrophe
/// are word characters; everything else separates words.
pub fn is_word_character(c: char) -> bool {
    c.is_alphabetic() || c == APOSTROPHE
}

/// Check whether a whole string is a word token.
///
/// A word token is non-empty and made only of word characters. The empty
/// string is not a word.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_character)
}

/// Case-fold a word for storage and comparison.
///
/// Every dictionary and misspelling-map key goes through this function
/// exactly once on the way in, so all stored keys are lowercase. Full
/// Unicode mappings apply, so `İ` folds to `i` followed by a combining dot.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character so that word length in chars is preserved.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
///
/// For characters with multi-character uppercase expansions (`ß`), returns
/// only the first character.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}
