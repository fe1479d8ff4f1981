// Interactive document checker
//
// Walks a document token by token, copies everything it recognises to the
// output and asks the user what to do with each unknown word.

use std::collections::VecDeque;
use std::io::{self, BufRead, Read, Write};

use spellcheck_core::character::is_word;
use tracing::debug;

use crate::corrector::Corrector;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::tokenizer::TokenScanner;

/// Options controlling the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Maximum number of candidates listed for one unknown word.
    pub max_listed: usize,
    /// How many invalid answers are tolerated before the word is kept
    /// unchanged. `None` asks until a valid answer arrives.
    pub max_attempts: Option<usize>,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            max_listed: 10,
            max_attempts: None,
        }
    }
}

/// What the checker did over one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Word tokens seen.
    pub words: usize,
    /// Word tokens missing from the dictionary.
    pub unknown: usize,
    /// Unknown words that were replaced in the output.
    pub replaced: usize,
}

/// The user's decision for one unknown word.
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Keep,
    Replace(String),
}

/// Checks documents against a dictionary, offering corrections from one
/// corrector (use a [`CorrectorChain`](crate::CorrectorChain) to combine
/// several).
pub struct SpellChecker<'a> {
    corrector: &'a dyn Corrector,
    dict: &'a Dictionary,
    options: CheckerOptions,
}

impl<'a> SpellChecker<'a> {
    pub fn new(corrector: &'a dyn Corrector, dict: &'a Dictionary) -> Self {
        Self::with_options(corrector, dict, CheckerOptions::default())
    }

    pub fn with_options(
        corrector: &'a dyn Corrector,
        dict: &'a Dictionary,
        options: CheckerOptions,
    ) -> Self {
        Self {
            corrector,
            dict,
            options,
        }
    }

    /// Check `document`, writing the corrected text to `out`.
    ///
    /// Non-word tokens and known words are copied verbatim. For every
    /// unknown word the menu is written to `prompt` and a numeric answer is
    /// read from `answers`:
    ///
    /// - `0` keeps the word,
    /// - `1` replaces it with the next whitespace-delimited token read from
    ///   `answers`,
    /// - `2..` replaces it with the listed candidate.
    ///
    /// Anything else is reported as invalid and asked again. If `answers`
    /// runs dry the word is kept.
    pub fn check_document<R, A, P, W>(
        &self,
        document: R,
        answers: A,
        mut prompt: P,
        mut out: W,
    ) -> Result<CheckReport>
    where
        R: Read,
        A: BufRead,
        P: Write,
        W: Write,
    {
        let mut answers = Answers::new(answers);
        let mut report = CheckReport::default();

        for token in TokenScanner::new(document)? {
            let token = token?;
            if !is_word(&token) {
                out.write_all(token.as_bytes())?;
                continue;
            }
            report.words += 1;
            if self.dict.is_word(&token) {
                out.write_all(token.as_bytes())?;
                continue;
            }

            report.unknown += 1;
            let candidates: Vec<String> = self
                .corrector
                .corrections(&token)?
                .into_iter()
                .take(self.options.max_listed)
                .collect();
            debug!(word = %token, candidates = candidates.len(), "unknown word");

            match self.ask(&token, &candidates, &mut answers, &mut prompt)? {
                Choice::Keep => out.write_all(token.as_bytes())?,
                Choice::Replace(replacement) => {
                    report.replaced += 1;
                    out.write_all(replacement.as_bytes())?;
                }
            }
        }

        out.flush()?;
        Ok(report)
    }

    fn ask<A: BufRead, P: Write>(
        &self,
        word: &str,
        candidates: &[String],
        answers: &mut Answers<A>,
        prompt: &mut P,
    ) -> io::Result<Choice> {
        writeln!(
            prompt,
            "The word: {word} is not in the dictionary. Please enter the number \
             corresponding with the appropriate action:"
        )?;
        writeln!(prompt, "0: Ignore and continue")?;
        writeln!(prompt, "1: Replace with another word")?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(prompt, "{}: Replace with {candidate}", i + 2)?;
        }
        prompt.flush()?;

        let mut attempts = 0;
        loop {
            let Some(answer) = answers.next_token()? else {
                return Ok(Choice::Keep);
            };
            match answer.parse::<usize>() {
                Ok(0) => return Ok(Choice::Keep),
                Ok(1) => {
                    return Ok(match answers.next_token()? {
                        Some(replacement) => Choice::Replace(replacement),
                        None => Choice::Keep,
                    });
                }
                Ok(n) if n - 2 < candidates.len() => {
                    return Ok(Choice::Replace(candidates[n - 2].clone()));
                }
                _ => {}
            }

            attempts += 1;
            if self.options.max_attempts.is_some_and(|max| attempts >= max) {
                return Ok(Choice::Keep);
            }
            writeln!(prompt, "Invalid input. Please try again!")?;
            prompt.flush()?;
        }
    }
}

/// Whitespace-delimited tokens read lazily from a line source.
struct Answers<A> {
    source: A,
    pending: VecDeque<String>,
}

impl<A: BufRead> Answers<A> {
    fn new(source: A) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.source.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
