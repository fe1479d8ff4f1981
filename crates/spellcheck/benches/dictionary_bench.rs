// Criterion benchmarks for the spellcheck crate.
//
// Uses the word list named by SPELLCHECK_DICT when set, otherwise the small
// fixture dictionary under tests/data.
//
// Run:
//   cargo bench -p spellcheck
//   SPELLCHECK_DICT=/usr/share/dict/words cargo bench -p spellcheck

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use spellcheck::{Corrector, Dictionary, Levenshtein, MappedCorrector, SwapCorrector};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn dictionary_path() -> PathBuf {
    if let Ok(path) = std::env::var("SPELLCHECK_DICT") {
        let path = PathBuf::from(path);
        if path.exists() {
            return path;
        }
        eprintln!("SPELLCHECK_DICT={} not found, using fixture", path.display());
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/small_dictionary.txt")
}

fn load_dictionary() -> Dictionary {
    Dictionary::from_path(dictionary_path()).expect("dictionary")
}

const QUERIES: [&str; 8] = [
    "the", "haet", "Thet", "aple", "ALIGATUR", "tigre", "baloon", "forgte",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Tokenize and insert the whole word list.
fn bench_build(c: &mut Criterion) {
    let text = std::fs::read(dictionary_path()).expect("failed to read dictionary");
    c.bench_function("dictionary_build", |b| {
        b.iter(|| std::hint::black_box(Dictionary::from_reader(text.as_slice()).expect("build")));
    });
}

fn bench_lookup(c: &mut Criterion) {
    let dict = load_dictionary();
    c.bench_function("dictionary_lookup_8_words", |b| {
        b.iter(|| {
            for word in &QUERIES {
                std::hint::black_box(dict.is_word(word));
            }
        });
    });
}

fn bench_levenshtein(c: &mut Criterion) {
    let dict = load_dictionary();
    let lev = Levenshtein::new(&dict);
    c.bench_function("levenshtein_8_words", |b| {
        b.iter(|| {
            for word in &QUERIES {
                std::hint::black_box(lev.corrections(word).expect("word"));
            }
        });
    });
}

fn bench_swap(c: &mut Criterion) {
    let dict = load_dictionary();
    let swap = SwapCorrector::new(&dict);
    c.bench_function("swap_8_words", |b| {
        b.iter(|| {
            for word in &QUERIES {
                std::hint::black_box(swap.corrections(word).expect("word"));
            }
        });
    });
}

fn bench_mapped(c: &mut Criterion) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/misspellings.txt");
    let table = MappedCorrector::from_path(path).expect("misspellings");
    c.bench_function("mapped_8_words", |b| {
        b.iter(|| {
            for word in &QUERIES {
                std::hint::black_box(table.corrections(word).expect("word"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_lookup,
    bench_levenshtein,
    bench_swap,
    bench_mapped
);
criterion_main!(benches);
