// Corrector backed by an explicit misspelling table

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use spellcheck_core::case::match_case;
use spellcheck_core::character::fold_case;
use tracing::debug;

use super::{Corrector, require_word};
use crate::error::{FormatViolation, Result, SpellError};

/// Looks corrections up in a table of known misspellings.
///
/// The table is read from a line-oriented definition source where every
/// line has the form `wrong,correct`:
///
/// ```text
/// aligatur,alligator
/// baloon,balloon
/// inspite,in spite
/// ther,their
/// ther,there
/// ```
///
/// Whitespace around a line and around either side of the comma is
/// ignored, both sides are case-folded, and a misspelling listed on several
/// lines collects all of its corrections. Blank lines are skipped. Any other
/// line without exactly one comma and two non-empty sides aborts the parse.
///
/// ```
/// use spellcheck::{Corrector, MappedCorrector};
///
/// let table: MappedCorrector = "tigger,trigger\ntigger,tiger".parse().unwrap();
/// let found: Vec<String> = table.corrections("Tigger").unwrap().into_iter().collect();
/// assert_eq!(found, ["Tiger", "Trigger"]);
/// ```
#[derive(Debug, Default)]
pub struct MappedCorrector {
    table: BTreeMap<String, BTreeSet<String>>,
}

impl MappedCorrector {
    /// Parse a definition source line by line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut table: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if let Some((wrong, correct)) = parse_line(idx + 1, &line)? {
                table.entry(wrong).or_default().insert(correct);
            }
        }
        debug!(entries = table.len(), "misspelling table loaded");
        Ok(Self { table })
    }

    /// Parse the definition file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading misspelling table");
        Self::from_reader(File::open(path)?)
    }

    /// Number of distinct misspelled forms in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl FromStr for MappedCorrector {
    type Err = SpellError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }
}

/// Split one definition line into its case-folded `(wrong, correct)` pair.
///
/// Returns `Ok(None)` for blank lines.
fn parse_line(line_no: usize, line: &str) -> Result<Option<(String, String)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let violation = |reason| SpellError::Format {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let (wrong, correct) = trimmed
        .split_once(',')
        .ok_or_else(|| violation(FormatViolation::MissingComma))?;
    if correct.contains(',') {
        return Err(violation(FormatViolation::ExtraComma));
    }

    let (wrong, correct) = (wrong.trim(), correct.trim());
    if wrong.is_empty() {
        return Err(violation(FormatViolation::EmptyWrong));
    }
    if correct.is_empty() {
        return Err(violation(FormatViolation::EmptyCorrect));
    }

    Ok(Some((fold_case(wrong), fold_case(correct))))
}

impl Corrector for MappedCorrector {
    fn corrections(&self, word: &str) -> Result<BTreeSet<String>> {
        require_word(word)?;
        let key = fold_case(word);
        let Some(suggestions) = self.table.get(&key) else {
            return Ok(BTreeSet::new());
        };
        Ok(match_case(word, suggestions.iter().filter(|s| **s != key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn table(text: &str) -> MappedCorrector {
        text.parse().unwrap()
    }

    fn violation(text: &str) -> (usize, FormatViolation) {
        match text.parse::<MappedCorrector>() {
            Err(SpellError::Format { line, reason, .. }) => (line, reason),
            other => panic!("expected a format error for {text:?}, got {other:?}"),
        }
    }

    #[test]
    fn uppercase_query_gets_uppercase_correction() {
        let t = table("aligatur,alligator");
        assert_eq!(t.corrections("ALIGATUR").unwrap(), set(&["ALLIGATOR"]));
    }

    #[test]
    fn repeated_misspellings_accumulate() {
        let t = table("tigger,trigger\ntigger,tiger");
        assert_eq!(t.len(), 1);
        assert_eq!(t.corrections("Tigger").unwrap(), set(&["Tiger", "Trigger"]));
        assert_eq!(t.corrections("tigger").unwrap(), set(&["tiger", "trigger"]));
    }

    #[test]
    fn lines_are_case_insensitive() {
        let t = table("baloon,balloon\nBaloon,balloon\nBaloon,Balloon\nBALOON,balloon\nbAlOon,BALLOON");
        assert_eq!(t.len(), 1);
        assert_eq!(t.corrections("baloon").unwrap(), set(&["balloon"]));
    }

    #[test]
    fn whitespace_around_fields_is_ignored() {
        let t = table("inspite,in spite\n   inspite,in spite\ninspite   ,in spite\n inspite ,   in spite  ");
        assert_eq!(t.corrections("inspite").unwrap(), set(&["in spite"]));
    }

    #[test]
    fn apostrophes_survive_parsing() {
        let t = table("who'ev,who've");
        assert_eq!(t.corrections("Who'ev").unwrap(), set(&["Who've"]));
    }

    #[test]
    fn unknown_words_get_nothing() {
        let t = table("ther,their\nther,there");
        assert!(t.corrections("their").unwrap().is_empty());
        assert!(t.corrections("zzz").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let t = table("\nther,their\n   \n\nther,there\n");
        assert_eq!(t.corrections("ther").unwrap(), set(&["their", "there"]));
    }

    #[test]
    fn empty_source_gives_empty_table() {
        let t = table("");
        assert!(t.is_empty());
        assert!(t.corrections("anything").unwrap().is_empty());
    }

    #[test]
    fn missing_wrong_side_is_rejected() {
        assert_eq!(violation(",correct"), (1, FormatViolation::EmptyWrong));
        assert_eq!(violation("  , correct"), (1, FormatViolation::EmptyWrong));
    }

    #[test]
    fn missing_correct_side_is_rejected() {
        assert_eq!(violation("wrong,"), (1, FormatViolation::EmptyCorrect));
        assert_eq!(violation("wrong,   "), (1, FormatViolation::EmptyCorrect));
    }

    #[test]
    fn missing_comma_is_rejected() {
        assert_eq!(violation("wrong correct"), (1, FormatViolation::MissingComma));
    }

    #[test]
    fn extra_comma_is_rejected() {
        assert_eq!(violation("wrong,correct,"), (1, FormatViolation::ExtraComma));
        assert_eq!(violation("a,b,c"), (1, FormatViolation::ExtraComma));
    }

    #[test]
    fn error_reports_the_offending_line() {
        let err = "ok,fine\nalso,good\nbroken line\nnever,read".parse::<MappedCorrector>();
        match err {
            Err(SpellError::Format { line, content, reason }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "broken line");
                assert_eq!(reason, FormatViolation::MissingComma);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn self_mapping_is_never_suggested() {
        let t = table("teh,the\nteh,teh");
        assert_eq!(t.corrections("teh").unwrap(), set(&["the"]));
    }

    #[test]
    fn uppercase_query_gets_full_uppercase_mapping() {
        let t = table("strase,straße");
        let found = t.corrections("STRASE").unwrap();
        assert_eq!(found, set(&["STRASSE"]));
        assert!(!found.contains("STRASE"));
    }

    #[test]
    fn correction_recased_into_the_query_is_dropped() {
        let t = table("strasse,straße");
        assert!(t.corrections("STRASSE").unwrap().is_empty());
        assert_eq!(t.corrections("strasse").unwrap(), set(&["straße"]));
    }

    #[test]
    fn non_words_are_rejected() {
        let t = table("ther,there");
        assert!(matches!(t.corrections("the r"), Err(SpellError::InvalidArgument(_))));
        assert!(matches!(t.corrections(""), Err(SpellError::InvalidArgument(_))));
    }

    #[test]
    fn read_errors_propagate() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        assert!(matches!(MappedCorrector::from_reader(Failing), Err(SpellError::Io(_))));
    }

    #[test]
    fn from_path_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("misspellings.txt");
        std::fs::write(&path, "aligatur,alligator\n").unwrap();
        let t = MappedCorrector::from_path(&path).unwrap();
        assert_eq!(t.corrections("aligatur").unwrap(), set(&["alligator"]));
        assert!(matches!(
            MappedCorrector::from_path(dir.path().join("missing.txt")),
            Err(SpellError::Io(_))
        ));
    }
}
