//! Shared building blocks for the spellcheck crates.
//!
//! - [`character`] -- word-character classification and case folding
//! - [`case`] -- case pattern detection and candidate re-casing

pub mod case;
pub mod character;

pub use case::{CaseType, detect_case, match_case, set_case};
pub use character::{fold_case, is_word, is_word_character};
