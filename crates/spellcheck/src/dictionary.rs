// Case-insensitive prefix-trie dictionary

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use spellcheck_core::character::{APOSTROPHE, fold_case, is_word};
use tracing::{debug, trace};

use crate::error::Result;
use crate::tokenizer::TokenScanner;

/// Number of child slots per node: `a`..=`z` plus the apostrophe.
pub const ALPHABET_SIZE: usize = 27;

/// Map a lowercase character to its child slot.
///
/// Letters `a`..=`z` map to 0..=25 and the apostrophe to 26. Anything else
/// has no slot and cannot be stored.
fn slot(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        APOSTROPHE => Some(ALPHABET_SIZE - 1),
        _ => None,
    }
}

/// A trie node. `terminal` is set iff the path from the root spells an
/// inserted word.
#[derive(Debug, Default)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children[slot(c)?].as_deref()
    }
}

/// The set of known words.
///
/// Built once from a token source; every token that is a word is stored
/// lowercased, everything else is ignored. Queries are case-insensitive and
/// never mutate the trie, so a built dictionary can be shared freely across
/// threads.
///
/// ```
/// use spellcheck::Dictionary;
///
/// let dict = Dictionary::from_words(["apple", "banana"]);
/// assert!(dict.is_word("ApPlE"));
/// assert!(!dict.is_word("pineapple"));
/// assert_eq!(dict.word_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Dictionary {
    root: TrieNode,
    word_count: usize,
}

impl Dictionary {
    /// Build a dictionary from a sequence of raw tokens.
    ///
    /// Non-word tokens are skipped. The first I/O error from the source
    /// aborts the build and is returned unchanged.
    pub fn build<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut dict = Self::default();
        for token in tokens {
            let token = token?;
            if is_word(&token) {
                dict.insert(&token);
            } else {
                trace!(token = %token.escape_debug(), "skipping non-word token");
            }
        }
        debug!(words = dict.word_count, "dictionary built");
        Ok(dict)
    }

    /// Build a dictionary by tokenizing `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::build(TokenScanner::new(reader)?)
    }

    /// Build a dictionary from the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dictionary");
        Self::from_reader(File::open(path)?)
    }

    /// Build a dictionary from in-memory words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        for word in words {
            let word = word.as_ref();
            if is_word(word) {
                dict.insert(word);
            }
        }
        dict
    }

    /// Insert a word token, case-folded. Inserting a word twice is a no-op.
    fn insert(&mut self, word: &str) {
        let folded = fold_case(word);
        let Some(slots) = folded.chars().map(slot).collect::<Option<Vec<usize>>>() else {
            debug!(word = %word, "word outside the trie alphabet, skipped");
            return;
        };

        let mut node = &mut self.root;
        for i in slots {
            node = &mut **node.children[i].get_or_insert_with(Box::default);
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    /// Check whether `word` is in the dictionary, ignoring case.
    ///
    /// The empty string and words with characters outside `a`..=`z` and
    /// the apostrophe are never members.
    pub fn is_word(&self, word: &str) -> bool {
        let folded = fold_case(word);
        folded
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
            .is_some_and(|node| node.terminal)
    }

    /// Number of distinct case-folded words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
