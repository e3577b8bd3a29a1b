//! Candidate trimming.
//!
//! Words are trimmed in two passes: trailing sentence punctuation first,
//! then matching bracket pairs from both ends. The order matters: removing
//! punctuation can expose a new matching pair, as in `(www.example.org).`.

use crate::Range;

/// Sentence punctuation stripped from the end of a word.
#[inline]
fn is_trailing_punctuation(b: u8) -> bool {
    matches!(b, b'.' | b':' | b'?' | b'!' | b',' | b';')
}

/// Whether `first` and `last` open and close the same bracket pair.
#[inline]
fn is_bracket_pair(first: u8, last: u8) -> bool {
    matches!(
        (first, last),
        (b'(', b')') | (b'[', b']') | (b'{', b'}') | (b'<', b'>')
    )
}

/// Trim a word range down to the candidate it may contain.
///
/// Brackets are only removed in matching pairs, so a link keeps inner
/// parentheses such as `https://example.org/example_(example)`. All trimmed
/// characters are ASCII, so the result stays on `char` boundaries. The
/// returned range may be empty.
///
/// # Example
/// ```
/// use linkernizer::trim::trim_candidate;
/// use linkernizer::Range;
///
/// let text = "(https://www.example.org)!";
/// let range = trim_candidate(text, Range::from_usize(0, text.len()));
/// assert_eq!(range.slice(text), "https://www.example.org");
/// ```
pub fn trim_candidate(input: &str, mut range: Range) -> Range {
    let bytes = input.as_bytes();

    while !range.is_empty() && is_trailing_punctuation(bytes[range.end_usize() - 1]) {
        range.shrink_end(1);
    }

    while range.len() > 1
        && is_bracket_pair(bytes[range.start_usize()], bytes[range.end_usize() - 1])
    {
        range.shrink_both(1);
    }

    range
}
