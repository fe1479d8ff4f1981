// Correction strategies
//
// Every strategy implements `Corrector`: given a misspelled word it returns
// an ordered set of candidates, already re-cased to match the query.
//
//   - `mapped`: explicit wrong -> correct table loaded from a definition file
//   - `levenshtein`: single deletion / insertion / substitution
//   - `swap`: single adjacent transposition
//
// Edit-based strategies build candidates in a scratch buffer and hand each
// one to `Candidates::offer`, which keeps it only if the dictionary knows it.

pub mod levenshtein;
pub mod mapped;
pub mod swap;

use std::collections::BTreeSet;

use spellcheck_core::character::{fold_case, is_word};

use crate::dictionary::Dictionary;
use crate::error::{Result, SpellError};

pub use levenshtein::Levenshtein;
pub use mapped::MappedCorrector;
pub use swap::SwapCorrector;

/// A correction strategy.
///
/// Implementations are pure reads over immutable state, so one instance can
/// serve any number of threads.
pub trait Corrector: Send + Sync {
    /// Return corrections for `word`, re-cased to follow its case pattern.
    ///
    /// Fails with [`SpellError::InvalidArgument`] if `word` is not a word
    /// token. Returns an empty set when `word` is already correct or when
    /// nothing plausible was found. The query itself is never suggested.
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>>;
}

impl<C: Corrector + ?Sized> Corrector for &C {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        (**self).corrections(word)
    }
}

impl<C: Corrector + ?Sized> Corrector for Box<C> {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        (**self).corrections(word)
    }
}

/// Reject queries that are not word tokens.
pub(crate) fn require_word(word: &str) -> Result<()> {
    if is_word(word) {
        Ok(())
    } else {
        Err(SpellError::not_a_word(word))
    }
}

// ---------------------------------------------------------------------------
// Candidate collection
// ---------------------------------------------------------------------------

/// Collects dictionary-valid candidates derived from one query.
///
/// Holds the case-folded query as a char vector so generators can index
/// character positions directly. Candidates are stored lowercase; re-casing
/// happens once, after all generators have run.
pub(crate) struct Candidates<'d> {
    dict: &'d Dictionary,
    word: Vec<char>,
    found: BTreeSet<String>,
}

impl<'d> Candidates<'d> {
    pub(crate) fn new(dict: &'d Dictionary, word: &str) -> Self {
        Self {
            dict,
            word: fold_case(word).chars().collect(),
            found: BTreeSet::new(),
        }
    }

    /// The case-folded query.
    pub(crate) fn word(&self) -> &[char] {
        &self.word
    }

    /// Keep `buffer` if it is a known word other than the query itself.
    pub(crate) fn offer(&mut self, buffer: &[char]) {
        if buffer == self.word.as_slice() {
            return;
        }
        let candidate: String = buffer.iter().collect();
        if self.dict.is_word(&candidate) {
            self.found.insert(candidate);
        }
    }

    pub(crate) fn into_set(self) -> BTreeSet<String> {
        self.found
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Runs several correctors and merges their results.
///
/// Each member decides on its own whether the query is already correct; the
/// chain only forms the union.
///
/// ```
/// use spellcheck::{Corrector, CorrectorChain, Dictionary, Levenshtein, SwapCorrector};
///
/// let dict = Dictionary::from_words(["heat", "hate", "hat"]);
/// let chain = CorrectorChain::new()
///     .with(Levenshtein::new(&dict))
///     .with(SwapCorrector::new(&dict));
/// let found = chain.corrections("haet").unwrap();
/// assert!(found.contains("hate") && found.contains("heat") && found.contains("hat"));
/// ```
#[derive(Default)]
pub struct CorrectorChain<'a> {
    correctors: Vec<Box<dyn Corrector + 'a>>,
}

impl<'a> CorrectorChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a corrector, builder style.
    pub fn with(mut self, corrector: impl Corrector + 'a) -> Self {
        self.push(corrector);
        self
    }

    pub fn push(&mut self, corrector: impl Corrector + 'a) {
        self.correctors.push(Box::new(corrector));
    }

    pub fn len(&self) -> usize {
        self.correctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.correctors.is_empty()
    }
}

impl Corrector for CorrectorChain<'_> {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        let mut merged = BTreeSet::new();
        for corrector in &self.correctors {
            merged.extend(corrector.corrections(word)?);
        }
        Ok(merged)
    }
}
