// Case type detection, conversion and candidate re-casing

use std::collections::BTreeSet;

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only apostrophes, digits, etc.).
    NoLetters,
    /// All letters are lowercase: "apple".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Apple".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "aPple".
    Complex,
    /// All letters are uppercase: "APPLE".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (apostrophes, punctuation) are ignored when
/// determining the pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    let Some((&first, rest)) = word.split_first() else {
        return CaseType::NoLetters;
    };
    let any_lower = word.iter().any(|&c| is_lower(c));
    let upper_after_first = rest.iter().any(|&c| is_upper(c));

    match (is_upper(first), any_lower, upper_after_first) {
        (false, false, false) => CaseType::NoLetters,
        (_, false, _) => CaseType::AllUpper,
        (_, true, true) => CaseType::Complex,
        (true, true, false) => CaseType::FirstUpper,
        (false, true, false) => CaseType::AllLower,
    }
}

/// Rewrite `word` in place to follow `case_type`.
///
/// `NoLetters` and `Complex` leave the word untouched; `FirstUpper`
/// lowercases everything after the first character.
pub fn set_case(word: &mut [char], case_type: CaseType) {
    let Some((first, rest)) = word.split_first_mut() else {
        return;
    };
    let (head, tail): (fn(char) -> char, fn(char) -> char) = match case_type {
        CaseType::NoLetters | CaseType::Complex => return,
        CaseType::AllLower => (simple_lower, simple_lower),
        CaseType::AllUpper => (simple_upper, simple_upper),
        CaseType::FirstUpper => (simple_upper, simple_lower),
    };
    *first = head(*first);
    for c in rest {
        *c = tail(*c);
    }
}

/// Pick the transformation that makes a stored candidate mirror `original`.
///
/// An all-uppercase original wins over a capitalized one, so "A" and "ABC"
/// both uppercase their candidates. Any other original whose first
/// character is uppercase (including `Complex` ones such as "McDonald")
/// capitalizes. Everything else leaves candidates as stored.
fn target_case(original: &[char]) -> CaseType {
    match detect_case(original) {
        CaseType::AllUpper => CaseType::AllUpper,
        _ if original.first().is_some_and(|&c| is_upper(c)) => CaseType::FirstUpper,
        _ => CaseType::NoLetters,
    }
}

/// Re-case every candidate to follow the case pattern of `original`.
///
/// Unlike [`set_case`], this uses full Unicode case mappings, so a
/// candidate may change length ("straße" uppercases to "STRASSE"). A
/// re-cased candidate equal to `original` is dropped.
///
/// The result is an ordered set, so callers see candidates in lexicographic
/// order regardless of the order they were generated in.
pub fn match_case<I, S>(original: &str, candidates: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let case = target_case(&original.chars().collect::<Vec<char>>());

    candidates
        .into_iter()
        .map(|candidate| recase(candidate.as_ref(), case))
        .filter(|candidate| candidate != original)
        .collect()
}

fn recase(candidate: &str, case: CaseType) -> String {
    match case {
        CaseType::AllUpper => candidate.to_uppercase(),
        CaseType::AllLower => candidate.to_lowercase(),
        CaseType::FirstUpper => {
            let mut chars = candidate.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.as_str().to_lowercase().chars())
                    .collect(),
                None => String::new(),
            }
        }
        CaseType::NoLetters | CaseType::Complex => candidate.to_string(),
    }
}
