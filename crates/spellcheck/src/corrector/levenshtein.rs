// Edit-distance-one corrector: deletions, insertions and substitutions

use std::collections::BTreeSet;

use spellcheck_core::case::match_case;
use tracing::trace;

use super::{Candidates, Corrector, require_word};
use crate::dictionary::Dictionary;
use crate::error::Result;

/// Letters tried by insertions and substitutions. The apostrophe is not
/// part of it, so a missing or extra apostrophe is never repaired here.
fn letters() -> impl Iterator<Item = char> {
    'a'..='z'
}

/// Suggests dictionary words at Levenshtein distance one from the query.
///
/// An edit is inserting one letter, deleting one character, or replacing
/// one character with a different letter. Swapping neighbours is two edits
/// under this metric; see [`SwapCorrector`](super::SwapCorrector).
pub struct Levenshtein<'a> {
    dict: &'a Dictionary,
}

impl<'a> Levenshtein<'a> {
    pub fn new(dict: &'a Dictionary) -> Self {
        Self { dict }
    }

    /// Known words obtained by deleting one character. Lowercase.
    ///
    /// Like every family below, fails with
    /// [`SpellError::InvalidArgument`](crate::SpellError::InvalidArgument)
    /// if `word` is not a word token.
    pub fn deletions(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        let mut candidates = Candidates::new(self.dict, word);
        generate_deletions(&mut candidates);
        Ok(candidates.into_set())
    }

    /// Known words obtained by inserting one letter. Lowercase.
    pub fn insertions(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        let mut candidates = Candidates::new(self.dict, word);
        generate_insertions(&mut candidates);
        Ok(candidates.into_set())
    }

    /// Known words obtained by replacing one character with a different
    /// letter. Lowercase.
    pub fn substitutions(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        let mut candidates = Candidates::new(self.dict, word);
        generate_substitutions(&mut candidates);
        Ok(candidates.into_set())
    }
}

impl Corrector for Levenshtein<'_> {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        if self.dict.is_word(word) {
            return Ok(BTreeSet::new());
        }

        let mut candidates = Candidates::new(self.dict, word);
        generate_deletions(&mut candidates);
        generate_insertions(&mut candidates);
        generate_substitutions(&mut candidates);

        let found = candidates.into_set();
        trace!(word, found = found.len(), "edit distance candidates");
        Ok(match_case(word, found))
    }
}

fn generate_deletions(candidates: &mut Candidates<'_>) {
    let word = candidates.word().to_vec();
    let mut buffer = Vec::with_capacity(word.len());
    for i in 0..word.len() {
        buffer.clear();
        buffer.extend_from_slice(&word[..i]);
        buffer.extend_from_slice(&word[i + 1..]);
        candidates.offer(&buffer);
    }
}

fn generate_insertions(candidates: &mut Candidates<'_>) {
    let word = candidates.word().to_vec();
    let mut buffer = Vec::with_capacity(word.len() + 1);
    for i in 0..=word.len() {
        for c in letters() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.push(c);
            buffer.extend_from_slice(&word[i..]);
            candidates.offer(&buffer);
        }
    }
}

fn generate_substitutions(candidates: &mut Candidates<'_>) {
    let word = candidates.word().to_vec();
    let mut buffer = word.clone();
    for i in 0..word.len() {
        for c in letters().filter(|&c| c != word[i]) {
            buffer[i] = c;
            candidates.offer(&buffer);
        }
        buffer[i] = word[i];
    }
}
