// Error taxonomy shared by dictionary construction, correctors and the checker

use std::fmt;

/// The way a misspelling-definition line breaks the `wrong,correct` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// The line has no comma at all.
    MissingComma,
    /// The line has more than one comma.
    ExtraComma,
    /// Nothing but whitespace before the comma.
    EmptyWrong,
    /// Nothing but whitespace after the comma.
    EmptyCorrect,
}

impl fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FormatViolation::MissingComma => "expected `wrong,correct` but found no comma",
            FormatViolation::ExtraComma => "expected exactly one comma",
            FormatViolation::EmptyWrong => "misspelled form is empty",
            FormatViolation::EmptyCorrect => "corrected form is empty",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the spellcheck crate.
///
/// Nothing is retried or swallowed: every error reaches the direct caller.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// A required input was absent, or a query was not a word token.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A misspelling-definition line does not have the `wrong,correct` shape.
    #[error("format error on line {line}: {reason}: {content:?}")]
    Format {
        /// 1-based line number in the definition source.
        line: usize,
        /// The offending line, untrimmed.
        content: String,
        reason: FormatViolation,
    },

    /// Reading the underlying source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpellError {
    /// Shorthand for the error returned when a query is not a word token.
    pub(crate) fn not_a_word(word: &str) -> Self {
        SpellError::InvalidArgument(format!("{word:?} is not a word"))
    }
}

pub type Result<T> = std::result::Result<T, SpellError>;
