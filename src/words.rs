//! Word segmentation on an extended whitespace set.
//!
//! Spaces inside real links are expected to be percent-encoded, so any
//! whitespace character is treated as a hard word boundary.

use std::iter::FusedIterator;

use crate::Range;

/// ASCII whitespace boundaries: tab, LF, VT, FF, CR and space.
const ASCII_WHITESPACE: [bool; 128] = {
    let mut table = [false; 128];
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[0x0B] = true;
    table[0x0C] = true;
    table[b'\r' as usize] = true;
    table[b' ' as usize] = true;
    table
};

/// Non-ASCII boundaries. Their UTF-8 encodings start with
/// 0xC2, 0xE1, 0xE2 or 0xE3.
#[inline]
fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0085}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Byte length of the whitespace character at `pos`, or 0 if there is none.
///
/// `pos` may point into the middle of a multi-byte character; continuation
/// bytes never start a boundary.
#[inline]
fn whitespace_len(text: &str, pos: usize) -> usize {
    let b = text.as_bytes()[pos];
    if b < 0x80 {
        return ASCII_WHITESPACE[b as usize] as usize;
    }
    if !matches!(b, 0xC2 | 0xE1 | 0xE2 | 0xE3) {
        return 0;
    }
    // Lead bytes are always char boundaries.
    match text[pos..].chars().next() {
        Some(c) if is_unicode_whitespace(c) => c.len_utf8(),
        _ => 0,
    }
}

/// Lazy iterator over the words of a text.
///
/// Yields the byte range of every maximal run of non-whitespace
/// characters. Runs of whitespace never produce empty ranges. Cloning
/// the iterator restarts from the clone point.
///
/// # Example
/// ```
/// use linkernizer::words::Words;
///
/// let text = " Lorem\u{00A0}www.example.org\n";
/// let words: Vec<&str> = Words::new(text).map(|r| r.slice(text)).collect();
/// assert_eq!(words, ["Lorem", "www.example.org"]);
/// ```
#[derive(Clone, Debug)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Words<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for Words<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        let len = self.text.len();

        while self.pos < len {
            let n = whitespace_len(self.text, self.pos);
            if n == 0 {
                break;
            }
            self.pos += n;
        }

        if self.pos >= len {
            return None;
        }

        let start = self.pos;
        while self.pos < len && whitespace_len(self.text, self.pos) == 0 {
            self.pos += 1;
        }

        Some(Range::from_usize(start, self.pos))
    }
}

impl FusedIterator for Words<'_> {}
