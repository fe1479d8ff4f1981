// spellcheck-suggest: Print corrections for words.
//
// Correctly spelled words are printed as `word (correct)`. Others are
// printed as `word:` followed by one indented correction per line.
//
// Usage:
//   spellcheck-suggest [-d DICT] [-m FILE] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Word list to check against
//   -m, --misspellings FILE   Table of known misspellings (`wrong,correct`)
//   -h, --help                Print help

use std::io::{self, Write};

use spellcheck_cli::fatal;

fn main() {
    spellcheck_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellcheck_cli::wants_help(&args) {
        println!("spellcheck-suggest: Print corrections for words.");
        println!();
        println!("Usage: spellcheck-suggest [-d DICT] [-m FILE] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word list (default: $SPELLCHECK_DICT)");
        println!("  -m, --misspellings FILE  Also consult a table of known misspellings");
        println!("  -h, --help               Print this help");
        return;
    }

    let (dict_path, args) = spellcheck_cli::parse_dict_path(&args).unwrap_or_else(|e| fatal(&e));
    let (mut tables, words) =
        spellcheck_cli::take_option(&args, "-m", "--misspellings").unwrap_or_else(|e| fatal(&e));

    if let Some(unknown) = words.iter().find(|a| a.starts_with('-') && a.len() > 1) {
        fatal(&format!("unknown option {unknown}"));
    }

    let table = tables
        .pop()
        .map(|path| spellcheck_cli::load_misspellings(&path).unwrap_or_else(|e| fatal(&e)));
    let dict = spellcheck_cli::load_dictionary(dict_path.as_deref()).unwrap_or_else(|e| fatal(&e));
    let strategies = spellcheck_cli::default_strategies(table.is_some());
    let chain = spellcheck_cli::build_chain(&strategies, &dict, table.as_ref())
        .unwrap_or_else(|e| fatal(&e));

    let mut out = io::BufWriter::new(io::stdout().lock());
    let result = if words.is_empty() {
        spellcheck_cli::suggest_lines(io::stdin().lock(), &dict, &chain, &mut out)
    } else {
        words
            .iter()
            .try_for_each(|word| spellcheck_cli::write_suggestions(word, &dict, &chain, &mut out))
            .and_then(|()| out.flush())
    };
    if let Err(e) = result {
        fatal(&format!("I/O error: {e}"));
    }
}
