// Adjacent-transposition corrector

use std::collections::BTreeSet;

use spellcheck_core::case::match_case;

use super::{Candidates, Corrector, require_word};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Suggests dictionary words that differ from the query by exactly one swap
/// of two neighbouring characters ("wiht" -> "with").
///
/// Only adjacent pairs are tried, so a word of `n` characters produces at
/// most `n - 1` candidates.
pub struct SwapCorrector<'a> {
    dict: &'a Dictionary,
}

impl<'a> SwapCorrector<'a> {
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }
}

impl Corrector for SwapCorrector<'_> {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        if self.dict.is_word(word) {
            return Ok(BTreeSet::new());
        }

        let mut candidates = Candidates::new(self.dict, word);
        let mut buffer = candidates.word().to_vec();
        for i in 1..buffer.len() {
            // Swapping equal characters gives back the query
            if buffer[i - 1] == buffer[i] {
                continue;
            }
            buffer.swap(i - 1, i);
            candidates.offer(&buffer);
            buffer.swap(i - 1, i);
        }

        Ok(match_case(word, candidates.into_set()))
    }
}
