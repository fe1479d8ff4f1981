//! Trie-backed spell checking with pluggable correction strategies.
//!
//! # Architecture
//!
//! - [`tokenizer`] -- lazy split of text into word and non-word runs
//! - [`dictionary`] -- case-insensitive 27-symbol trie of known words
//! - [`corrector`] -- the [`Corrector`] trait and its strategies:
//!   [`MappedCorrector`], [`Levenshtein`], [`SwapCorrector`], plus
//!   [`CorrectorChain`] to merge several
//! - [`checker`] -- interactive document checker built on the above
//! - [`error`] -- [`SpellError`] and the crate [`Result`] alias
//!
//! ```
//! use spellcheck::{Corrector, Dictionary, SwapCorrector};
//!
//! let dict = Dictionary::from_words(["heat", "hate"]);
//! assert!(!dict.is_word("haet"));
//!
//! let swap = SwapCorrector::new(&dict);
//! let found: Vec<String> = swap.corrections("Haet").unwrap().into_iter().collect();
//! assert_eq!(found, ["Hate", "Heat"]);
//! ```

pub mod checker;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod tokenizer;

pub use checker::{CheckReport, CheckerOptions, SpellChecker};
pub use corrector::{Corrector, CorrectorChain, Levenshtein, MappedCorrector, SwapCorrector};
pub use dictionary::Dictionary;
pub use error::{FormatViolation, Result, SpellError};
pub use tokenizer::TokenScanner;
