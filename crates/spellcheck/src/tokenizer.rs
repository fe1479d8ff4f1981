// Lazy word / non-word tokenizer over any byte reader

use std::io::{self, BufRead, BufReader, Read};
use std::iter::FusedIterator;

pub use spellcheck_core::character::{is_word, is_word_character};

/// Splits a UTF-8 stream into alternating maximal runs of word characters
/// and non-word characters.
///
/// Concatenating every token reproduces the input exactly. The scanner
/// only ever holds one character of lookahead, so it can walk inputs far
/// larger than memory. Once it has yielded an error or reached the end of
/// input it yields `None` forever.
///
/// ```
/// use spellcheck::tokenizer::TokenScanner;
///
/// let scanner = TokenScanner::new("Aren't you\ntired".as_bytes()).unwrap();
/// let tokens: Vec<String> = scanner.collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens, ["Aren't", " ", "you", "\n", "tired"]);
/// ```
pub struct TokenScanner<R> {
    reader: BufReader<R>,
    /// Next unconsumed character; `None` at end of input.
    lookahead: Option<char>,
}

impl<R: Read> TokenScanner<R> {
    /// Create a scanner and read the first character of `reader`.
    ///
    /// Fails if that first read fails.
    pub fn new(reader: R) -> io::Result<Self> {
        let mut reader = BufReader::new(reader);
        let lookahead = read_char(&mut reader)?;
        Ok(Self { reader, lookahead })
    }

    /// Returns `true` if another token is available.
    pub fn has_next(&self) -> bool {
        self.lookahead.is_some()
    }
}

impl<R: Read> Iterator for TokenScanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.lookahead?;
        let in_word = is_word_character(first);
        let mut token = String::new();
        token.push(first);

        loop {
            match read_char(&mut self.reader) {
                Ok(Some(c)) if is_word_character(c) == in_word => token.push(c),
                Ok(next) => {
                    self.lookahead = next;
                    return Some(Ok(token));
                }
                Err(e) => {
                    self.lookahead = None;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<R: Read> FusedIterator for TokenScanner<R> {}

/// Decode one UTF-8 character from `reader`, or `None` at end of input.
fn read_char<R: BufRead>(reader: &mut R) -> io::Result<Option<char>> {
    let mut buf = [0u8; 4];
    loop {
        match reader.read(&mut buf[..1]) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    let width = utf8_width(buf[0]).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid UTF-8 lead byte 0x{:02x}", buf[0]),
        )
    })?;
    reader.read_exact(&mut buf[1..width])?;

    let s = std::str::from_utf8(&buf[..width])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(s.chars().next())
}

/// Encoded length of a UTF-8 sequence given its lead byte.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(input: &str) -> TokenScanner<&[u8]> {
        TokenScanner::new(input.as_bytes()).unwrap()
    }

    fn tokens(input: &str) -> Vec<String> {
        scan(input).collect::<io::Result<_>>().unwrap()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        let mut ts = scan("");
        assert!(!ts.has_next());
        assert!(ts.next().is_none());
    }

    #[test]
    fn single_word() {
        let mut ts = scan("una");
        assert!(ts.has_next());
        assert_eq!(ts.next().unwrap().unwrap(), "una");
        assert!(!ts.has_next());
    }

    #[test]
    fn single_non_word() {
        assert_eq!(tokens("$%"), ["$%"]);
    }

    #[test]
    fn non_word_then_word() {
        assert_eq!(tokens("$% hola"), ["$% ", "hola"]);
    }

    #[test]
    fn word_then_non_word() {
        assert_eq!(tokens("hola $%"), ["hola", " $%"]);
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        assert_eq!(
            tokens("Aren't you \ntired"),
            ["Aren't", " ", "you", " \n", "tired"]
        );
    }

    #[test]
    fn digits_split_words() {
        assert_eq!(tokens("abc123def"), ["abc", "123", "def"]);
    }

    #[test]
    fn multibyte_letters_are_word_characters() {
        assert_eq!(tokens("caf\u{00E9} ok"), ["caf\u{00E9}", " ", "ok"]);
    }

    #[test]
    fn tokens_cover_the_input_without_gaps() {
        let input = "  The quick, brown fox -- didn't jump!\n";
        assert_eq!(tokens(input).concat(), input);
    }

    #[test]
    fn tokens_alternate_between_kinds() {
        let toks = tokens("one, two; three");
        for pair in toks.windows(2) {
            assert_ne!(is_word(&pair[0]), is_word(&pair[1]));
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = &[b'a', b'b', 0xFF, b'c'];
        let mut ts = TokenScanner::new(bytes).unwrap();
        let err = ts.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(ts.next().is_none());
    }

    #[test]
    fn truncated_sequence_is_an_io_error() {
        let bytes: &[u8] = &[b'a', 0xC3];
        let mut ts = TokenScanner::new(bytes).unwrap();
        assert!(ts.next().unwrap().is_err());
    }
}
