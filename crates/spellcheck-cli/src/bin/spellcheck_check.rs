// spellcheck-check: Interactively spell check a document.
//
// Every unknown word in INPUT is shown on stderr together with numbered
// corrections; the chosen action is read from stdin. The corrected document
// is written to OUTPUT, or stdout when OUTPUT is omitted.
//
// Usage:
//   spellcheck-check [-d DICT] [-m FILE] [-s STRATEGY]... INPUT [OUTPUT]
//
// Options:
//   -d, --dict-path PATH      Word list to check against
//   -m, --misspellings FILE   Table of known misspellings (`wrong,correct`)
//   -s, --strategy NAME       levenshtein, swap or file (repeatable)
//   -n, --max-listed N        Maximum corrections listed per word (default: 10)
//   -h, --help                Print help

use std::fs::File;
use std::io::{self, BufWriter, Write};

use spellcheck::{CheckerOptions, SpellChecker};
use spellcheck_cli::{Strategy, fatal};

fn main() {
    spellcheck_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if spellcheck_cli::wants_help(&args) {
        println!("spellcheck-check: Interactively spell check a document.");
        println!();
        println!("Usage: spellcheck-check [-d DICT] [-m FILE] [-s STRATEGY]... INPUT [OUTPUT]");
        println!();
        println!("Unknown words are listed on stderr with numbered actions:");
        println!("  0     keep the word");
        println!("  1 W   replace it with W");
        println!("  2..   replace it with the listed correction");
        println!("Answers are read from stdin. The corrected document goes to");
        println!("OUTPUT, or stdout when OUTPUT is omitted.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH     Word list (default: $SPELLCHECK_DICT)");
        println!("  -m, --misspellings FILE  Table of known misspellings");
        println!("  -s, --strategy NAME      levenshtein, swap or file (repeatable;");
        println!("                           default: levenshtein and swap, plus file with -m)");
        println!("  -n, --max-listed N       Maximum corrections listed per word (default: 10)");
        println!("  -h, --help               Print this help");
        return;
    }

    let (dict_path, args) = spellcheck_cli::parse_dict_path(&args).unwrap_or_else(|e| fatal(&e));
    let (mut tables, args) =
        spellcheck_cli::take_option(&args, "-m", "--misspellings").unwrap_or_else(|e| fatal(&e));
    let (names, args) =
        spellcheck_cli::take_option(&args, "-s", "--strategy").unwrap_or_else(|e| fatal(&e));
    let (mut max_listed, args) =
        spellcheck_cli::take_option(&args, "-n", "--max-listed").unwrap_or_else(|e| fatal(&e));

    let mut options = CheckerOptions::default();
    if let Some(n) = max_listed.pop() {
        options.max_listed = n
            .parse()
            .unwrap_or_else(|_| fatal("invalid number for --max-listed"));
    }

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.len() > 1) {
        fatal(&format!("unknown option {unknown}"));
    }
    let (input, output) = match args.as_slice() {
        [input] => (input, None),
        [input, output] => (input, Some(output)),
        [] => fatal("missing INPUT (see --help)"),
        _ => fatal("too many arguments (see --help)"),
    };

    let table = tables
        .pop()
        .map(|path| spellcheck_cli::load_misspellings(&path).unwrap_or_else(|e| fatal(&e)));
    let strategies: Vec<Strategy> = if names.is_empty() {
        spellcheck_cli::default_strategies(table.is_some())
    } else {
        names
            .iter()
            .map(|n| n.parse().unwrap_or_else(|e: String| fatal(&e)))
            .collect()
    };

    let dict = spellcheck_cli::load_dictionary(dict_path.as_deref()).unwrap_or_else(|e| fatal(&e));
    let chain = spellcheck_cli::build_chain(&strategies, &dict, table.as_ref())
        .unwrap_or_else(|e| fatal(&e));
    let checker = SpellChecker::with_options(&chain, &dict, options);

    let document =
        File::open(input).unwrap_or_else(|e| fatal(&format!("failed to open {input}: {e}")));
    let out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).unwrap_or_else(|e| fatal(&format!("failed to create {path}: {e}"))),
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let report = checker
        .check_document(document, io::stdin().lock(), io::stderr(), out)
        .unwrap_or_else(|e| fatal(&e.to_string()));

    eprintln!(
        "{} words checked, {} unknown, {} replaced",
        report.words, report.unknown, report.replaced
    );
}
