// spellcheck-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use spellcheck::{
    Corrector, CorrectorChain, Dictionary, Levenshtein, MappedCorrector, SpellError,
    SwapCorrector,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when no `-d` argument is given.
pub const DICT_ENV: &str = "SPELLCHECK_DICT";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `warn` so normal runs stay quiet. Calling it twice is
/// harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

/// Decide which word list to load.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `SPELLCHECK_DICT` environment variable
///
/// With neither, the dictionary is absent and the result is
/// [`SpellError::InvalidArgument`].
pub fn resolve_dict_path(dict_path: Option<&str>) -> spellcheck::Result<PathBuf> {
    select_dict_path(dict_path, std::env::var(DICT_ENV).ok())
}

fn select_dict_path(arg: Option<&str>, env: Option<String>) -> spellcheck::Result<PathBuf> {
    arg.map(PathBuf::from)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .ok_or_else(|| {
            SpellError::InvalidArgument(format!(
                "no dictionary given; pass -d PATH or set {DICT_ENV}"
            ))
        })
}

/// Resolve the dictionary path and build the dictionary from it.
pub fn load_dictionary(dict_path: Option<&str>) -> Result<Dictionary, String> {
    let path = resolve_dict_path(dict_path).map_err(|e| e.to_string())?;
    debug!(path = %path.display(), "resolved dictionary path");
    Dictionary::from_path(&path).map_err(|e| format!("failed to load {}: {e}", path.display()))
}

/// Parse a misspelling definition file.
pub fn load_misspellings(path: &str) -> Result<MappedCorrector, String> {
    MappedCorrector::from_path(path).map_err(|e| format!("failed to load {path}: {e}"))
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A correction strategy selectable with `-s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Levenshtein,
    Swap,
    File,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "levenshtein" | "edit" => Ok(Strategy::Levenshtein),
            "swap" => Ok(Strategy::Swap),
            "file" | "map" => Ok(Strategy::File),
            other => Err(format!(
                "unknown strategy `{other}` (expected levenshtein, swap or file)"
            )),
        }
    }
}

/// Strategies used when none are named: both edit-based ones, plus the
/// misspelling table when one was supplied.
pub fn default_strategies(have_table: bool) -> Vec<Strategy> {
    let mut strategies = vec![Strategy::Levenshtein, Strategy::Swap];
    if have_table {
        strategies.push(Strategy::File);
    }
    strategies
}

/// Combine the selected strategies into one corrector.
pub fn build_chain<'a>(
    strategies: &[Strategy],
    dict: &'a Dictionary,
    table: Option<&'a MappedCorrector>,
) -> Result<CorrectorChain<'a>, String> {
    let mut chain = CorrectorChain::new();
    for strategy in strategies {
        match strategy {
            Strategy::Levenshtein => chain.push(Levenshtein::new(dict)),
            Strategy::Swap => chain.push(SwapCorrector::new(dict)),
            Strategy::File => match table {
                Some(table) => chain.push(table),
                None => return Err("strategy `file` requires -m FILE".to_string()),
            },
        }
    }
    Ok(chain)
}

// ---------------------------------------------------------------------------
// Suggestion output
// ---------------------------------------------------------------------------

/// Write the verdict for one word: `word (correct)`, or `word:` followed by
/// one indented correction per line.
///
/// A query that is not a word is reported on stderr and skipped; only
/// write failures are returned.
pub fn write_suggestions<W: Write>(
    word: &str,
    dict: &Dictionary,
    corrector: &dyn Corrector,
    out: &mut W,
) -> io::Result<()> {
    if dict.is_word(word) {
        return writeln!(out, "{word} (correct)");
    }
    match corrector.corrections(word) {
        Ok(found) if found.is_empty() => writeln!(out, "{word}: (no suggestions)"),
        Ok(found) => {
            writeln!(out, "{word}:")?;
            found.iter().try_for_each(|s| writeln!(out, "  {s}"))
        }
        Err(e) => {
            eprintln!("error: {e}");
            Ok(())
        }
    }
}

/// Run [`write_suggestions`] for every non-blank line of `input`, then
/// flush `out`. Stops at the first read or write error.
pub fn suggest_lines<R: BufRead, W: Write>(
    input: R,
    dict: &Dictionary,
    corrector: &dyn Corrector,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            write_suggestions(word, dict, corrector, out)?;
        }
    }
    out.flush()
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

/// Pull every `SHORT VALUE`, `LONG VALUE` and `LONG=VALUE` occurrence out
/// of `args`.
///
/// Returns `(values, remaining_args)`, values in command-line order.
pub fn take_option(
    args: &[String],
    short: &str,
    long: &str,
) -> Result<(Vec<String>, Vec<String>), String> {
    let mut values = Vec::new();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(long).and_then(|rest| rest.strip_prefix('=')) {
            values.push(val.to_string());
        } else if arg == short || arg == long {
            match iter.next() {
                Some(val) => values.push(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((values, remaining))
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`. The last occurrence wins.
pub fn parse_dict_path(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let (mut values, remaining) = take_option(args, "-d", "--dict-path")?;
    Ok((values.pop(), remaining))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
