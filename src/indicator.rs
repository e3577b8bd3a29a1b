//! Indicator prescan.
//!
//! A text can only contain a link if it contains one of `www.`
//! (ASCII case-insensitive), `://` or `@`. This check runs once over the
//! whole input and again for every word, so it stays on memchr.

use memchr::memmem;
use memchr::{memchr, memchr2};

/// Check whether `text` contains any link indicator.
///
/// # Example
/// ```
/// use linkernizer::indicator::contains_indicator;
///
/// assert!(contains_indicator(b"see WWW.example.org"));
/// assert!(contains_indicator(b"mail@example.org"));
/// assert!(!contains_indicator(b"example.org"));
/// ```
#[inline]
pub fn contains_indicator(text: &[u8]) -> bool {
    memchr(b'@', text).is_some() || memmem::find(text, b"://").is_some() || contains_www(text)
}

/// Find `www.` ignoring ASCII case.
#[inline]
fn contains_www(text: &[u8]) -> bool {
    let mut pos = 0;
    while let Some(offset) = memchr2(b'w', b'W', &text[pos..]) {
        let at = pos + offset;
        if is_www_at(text, at) {
            return true;
        }
        pos = at + 1;
    }
    false
}

#[inline]
fn is_www_at(text: &[u8], at: usize) -> bool {
    text.get(at..at + 4)
        .is_some_and(|window| window.eq_ignore_ascii_case(b"www."))
}
