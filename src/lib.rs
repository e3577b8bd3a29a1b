//! linkernizer: wrap links in plain text with HTML hyperlink markup
//!
//! Detects bare `www.` domains, scheme-qualified URIs and email addresses
//! and rewrites them as `<a>` elements. Every other character of the input
//! is left untouched.
//!
//! # Design Principles
//! - No regex: byte-level scanning with memchr
//! - Single linear pass, no backtracking
//! - No allocation when nothing is replaced: the input is handed back
//! - Heuristics over grammars: trailing punctuation and wrapping brackets
//!   are trimmed the way people write links in prose
//!
//! The output is not HTML-escaped. Callers must make sure the input does
//! not already contain markup.

pub mod classify;
pub mod indicator;
pub mod limits;
pub mod range;
pub mod render;
pub mod replacement;
pub mod trim;
pub mod words;

use std::borrow::Cow;

use smallvec::SmallVec;
use tracing::{debug, trace};

pub use classify::Classifier;
pub use range::Range;
pub use render::HtmlWriter;
pub use replacement::{Replacement, ReplacementKind};
pub use words::Words;

/// Replacements found in one input. Most texts hold only a few links.
pub type Replacements = SmallVec<[Replacement; 8]>;

/// Formatting options.
///
/// Build once and hand to [`Linkernizer::new`]; the options cannot change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Scheme put in front of `www.` links in the href only (never in the
    /// visible text).
    pub default_scheme: String,
    /// Host whose links count as internal, compared case-insensitively.
    /// Only used when `open_external_links_in_new_tab` is set. Should not
    /// contain a scheme or trailing slash, e.g. `www.example.org`.
    pub internal_host: String,
    /// Add `target="_blank"` to external links. Without an internal host
    /// every link is external.
    pub open_external_links_in_new_tab: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_scheme: "https://".to_string(),
            internal_host: String::new(),
            open_external_links_in_new_tab: false,
        }
    }
}

impl Options {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    pub fn with_internal_host(mut self, host: impl Into<String>) -> Self {
        self.internal_host = host.into();
        self
    }

    pub fn with_external_links_in_new_tab(mut self, enabled: bool) -> Self {
        self.open_external_links_in_new_tab = enabled;
        self
    }
}

/// Link detector and rewriter.
///
/// Holds only immutable options, so one instance can be created at startup
/// and shared across threads.
///
/// # Example
/// ```
/// use linkernizer::{Linkernizer, Options};
///
/// let linkernizer = Linkernizer::new(
///     Options::new()
///         .with_default_scheme("http://")
///         .with_internal_host("www.example.com")
///         .with_external_links_in_new_tab(true),
/// );
///
/// assert_eq!(
///     linkernizer.linkernize("www.example.org"),
///     "<a href=\"http://www.example.org\" target=\"_blank\">www.example.org</a>"
/// );
/// assert_eq!(
///     linkernizer.linkernize("www.example.com"),
///     "<a href=\"http://www.example.com\">www.example.com</a>"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Linkernizer {
    options: Options,
}

impl Linkernizer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Wrap the links in `input` with HTML hyperlink markup.
    ///
    /// Returns the input itself, without copying, when nothing is replaced.
    pub fn linkernize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !indicator::contains_indicator(input.as_bytes()) {
            return Cow::Borrowed(input);
        }

        let replacements = self.find_replacements(input);
        if replacements.is_empty() {
            return Cow::Borrowed(input);
        }

        let mut writer = HtmlWriter::with_capacity_for(input.len());
        render::render_replacements(input, &replacements, &self.options, &mut writer);
        debug!(
            input_len = input.len(),
            output_len = writer.len(),
            replacements = replacements.len(),
            "linkernized"
        );
        Cow::Owned(writer.into_string())
    }

    /// Like [`linkernize`](Self::linkernize), passing `None` through.
    #[inline]
    pub fn linkernize_opt<'a>(&self, input: Option<&'a str>) -> Option<Cow<'a, str>> {
        input.map(|input| self.linkernize(input))
    }

    /// Like [`linkernize`](Self::linkernize), always returning an owned string.
    #[inline]
    pub fn linkernize_to_string(&self, input: &str) -> String {
        self.linkernize(input).into_owned()
    }

    /// Linkernize into a provided buffer.
    ///
    /// `out` is cleared first. Its allocation is reused, which avoids
    /// allocating per call when processing many texts.
    #[inline]
    pub fn linkernize_into(&self, input: &str, out: &mut String) {
        linkernize_into_with_options(input, out, &self.options);
    }

    /// Find the spans of `input` that would be replaced, in input order.
    ///
    /// # Example
    /// ```
    /// use linkernizer::{Linkernizer, Range, ReplacementKind};
    ///
    /// let found = Linkernizer::default().find_replacements("Lorem (www.example.org). Ipsum");
    /// assert_eq!(found.len(), 1);
    /// assert_eq!(found[0].range, Range::new(7, 22));
    /// assert_eq!(found[0].kind, ReplacementKind::InternalWithoutScheme);
    /// ```
    #[inline]
    pub fn find_replacements(&self, input: &str) -> Replacements {
        find_replacements_with(input, &self.options)
    }
}

fn find_replacements_with(input: &str, options: &Options) -> Replacements {
    let mut replacements = Replacements::new();
    if input.len() > limits::MAX_INPUT_LEN {
        debug!(input_len = input.len(), "input too large, skipping");
        return replacements;
    }

    let classifier = Classifier::new(options);
    let bytes = input.as_bytes();

    for word in Words::new(input) {
        if !indicator::contains_indicator(word.slice_bytes(bytes)) {
            continue;
        }

        let candidate = trim::trim_candidate(input, word);
        if candidate.is_empty() {
            continue;
        }

        if let Some(kind) = classifier.classify(candidate.slice(input)) {
            trace!(start = candidate.start, end = candidate.end, %kind, "link found");
            replacements.push(Replacement::new(candidate, kind));
        }
    }

    replacements
}

/// Linkernizing as a capability, for callers that hold the rewriter behind
/// a trait object (`&dyn Linkernize`, `Arc<dyn Linkernize + Send + Sync>`).
pub trait Linkernize {
    /// Wrap the links in `input`; borrowed when nothing changed.
    fn linkernize<'a>(&self, input: &'a str) -> Cow<'a, str>;

    /// Wrap the links in `input` and return an owned string.
    fn linkernize_to_string(&self, input: &str) -> String {
        self.linkernize(input).into_owned()
    }

    /// Pass `None` through, otherwise linkernize.
    fn linkernize_opt<'a>(&self, input: Option<&'a str>) -> Option<Cow<'a, str>> {
        input.map(|input| self.linkernize(input))
    }
}

impl Linkernize for Linkernizer {
    #[inline]
    fn linkernize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Linkernizer::linkernize(self, input)
    }
}

/// Wrap links in `input` using default options.
///
/// # Example
/// ```
/// let html = linkernizer::linkernize("Write to mail@example.org.");
/// assert_eq!(html, "Write to <a href=\"mailto:mail@example.org\">mail@example.org</a>.");
/// ```
pub fn linkernize(input: &str) -> String {
    Linkernizer::default().linkernize_to_string(input)
}

/// Wrap links in `input` with the given options.
pub fn linkernize_with_options(input: &str, options: &Options) -> String {
    let mut out = String::new();
    linkernize_into_with_options(input, &mut out, options);
    out
}

/// Wrap links in `input` into a provided buffer with the given options.
///
/// `out` is cleared first and keeps its allocation.
pub fn linkernize_into_with_options(input: &str, out: &mut String, options: &Options) {
    out.clear();

    let replacements = if indicator::contains_indicator(input.as_bytes()) {
        find_replacements_with(input, options)
    } else {
        Replacements::new()
    };

    if replacements.is_empty() {
        out.push_str(input);
        return;
    }

    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render::render_replacements(input, &replacements, options, &mut writer);
    *out = writer.into_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.default_scheme, "https://");
        assert!(options.internal_host.is_empty());
        assert!(!options.open_external_links_in_new_tab);
    }

    #[test]
    fn test_builder() {
        let options = Options::new()
            .with_default_scheme("http://")
            .with_internal_host("www.example.com")
            .with_external_links_in_new_tab(true);
        assert_eq!(
            options,
            Options {
                default_scheme: "http://".to_string(),
                internal_host: "www.example.com".to_string(),
                open_external_links_in_new_tab: true,
            }
        );
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Linkernizer>();
    }

    #[test]
    fn test_borrowed_when_unchanged() {
        let linkernizer = Linkernizer::default();
        assert!(matches!(linkernizer.linkernize("example.org"), Cow::Borrowed(_)));
        assert!(matches!(linkernizer.linkernize("@example.org"), Cow::Borrowed(_)));
        assert!(matches!(linkernizer.linkernize(""), Cow::Borrowed("")));
        assert!(matches!(linkernizer.linkernize("www.example.org"), Cow::Owned(_)));
    }

    #[test]
    fn test_borrowed_is_same_slice() {
        let input = String::from("no links here");
        let output = Linkernizer::default().linkernize(&input);
        assert!(std::ptr::eq(input.as_str(), &*output));
    }

    #[test]
    fn test_opt_passes_none() {
        let linkernizer = Linkernizer::default();
        assert_eq!(linkernizer.linkernize_opt(None), None);
        assert_eq!(linkernizer.linkernize_opt(Some(" ")).as_deref(), Some(" "));
    }

    #[test]
    fn test_into_reuses_buffer() {
        let linkernizer = Linkernizer::default();
        let mut out = String::with_capacity(256);
        linkernizer.linkernize_into("www.example.org", &mut out);
        assert_eq!(out, "<a href=\"https://www.example.org\">www.example.org</a>");
        let capacity = out.capacity();

        linkernizer.linkernize_into("plain", &mut out);
        assert_eq!(out, "plain");
        assert_eq!(out.capacity(), capacity);
    }

    #[test]
    fn test_trait_object() {
        let linkernizer: Box<dyn Linkernize> = Box::new(Linkernizer::default());
        assert_eq!(
            linkernizer.linkernize_to_string("mail@example.org"),
            "<a href=\"mailto:mail@example.org\">mail@example.org</a>"
        );
        assert_eq!(linkernizer.linkernize_opt(None), None);
    }

    #[test]
    fn test_per_word_indicator_check() {
        // The text has an indicator, but the other words do not.
        let found =
            Linkernizer::default().find_replacements("example.org www.example.org example.com");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, Range::new(12, 27));
    }

    #[test]
    fn test_word_trimmed_to_nothing() {
        let found = Linkernizer::default().find_replacements("www. :// @ (www.)");
        assert!(found.is_empty());
    }
}
