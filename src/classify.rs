//! Candidate classification.
//!
//! Heuristics, in precedence order:
//! 1. Fewer than [`MIN_CANDIDATE_CHARS`] characters: not a link.
//! 2. Starts with `www.` (case-sensitive): link without a scheme.
//! 3. Contains `://`: link with a scheme.
//! 4. Exactly one `@`, not in first position: email address.
//!
//! Links are then split into internal and external. Hosts are only
//! resolved when new-tab mode is on and an internal host is configured.

use memchr::{memchr, memmem, memrchr};
use url::Url;

use crate::limits::MIN_CANDIDATE_CHARS;
use crate::{Options, ReplacementKind};

/// Classifies trimmed candidates against a set of options.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'o> {
    options: &'o Options,
}

impl<'o> Classifier<'o> {
    #[inline]
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Decide whether `candidate` is a link and of which kind.
    ///
    /// # Example
    /// ```
    /// use linkernizer::classify::Classifier;
    /// use linkernizer::{Options, ReplacementKind};
    ///
    /// let options = Options::default();
    /// let classifier = Classifier::new(&options);
    /// assert_eq!(classifier.classify("www.example.org"), Some(ReplacementKind::InternalWithoutScheme));
    /// assert_eq!(classifier.classify("mail@example.org"), Some(ReplacementKind::EmailWithoutScheme));
    /// assert_eq!(classifier.classify("@example.org"), None);
    /// ```
    pub fn classify(&self, candidate: &str) -> Option<ReplacementKind> {
        if is_too_short(candidate) {
            return None;
        }

        let bytes = candidate.as_bytes();

        if bytes.starts_with(b"www.") {
            return Some(self.link_kind(candidate, false));
        }

        if memmem::find(bytes, b"://").is_some() {
            return Some(self.link_kind(candidate, true));
        }

        if is_email(bytes) {
            let kind = if has_mailto_prefix(bytes) {
                ReplacementKind::EmailWithScheme
            } else {
                ReplacementKind::EmailWithoutScheme
            };
            return Some(kind);
        }

        None
    }

    fn link_kind(&self, link: &str, with_scheme: bool) -> ReplacementKind {
        // Without new tabs there is nothing to distinguish.
        if !self.options.open_external_links_in_new_tab {
            return ReplacementKind::link(true, with_scheme);
        }

        if self.options.internal_host.is_empty() {
            return ReplacementKind::link(false, with_scheme);
        }

        ReplacementKind::link(self.is_internal_host(link, with_scheme), with_scheme)
    }

    /// Compare the host of `link` with the configured internal host.
    ///
    /// Links without a scheme get the default scheme so they parse as
    /// absolute URLs. Unparseable links and links without a host are
    /// external.
    fn is_internal_host(&self, link: &str, with_scheme: bool) -> bool {
        let parsed = if with_scheme {
            Url::parse(link)
        } else {
            Url::parse(&format!("{}{}", self.options.default_scheme, link))
        };

        match parsed {
            Ok(url) => url
                .host_str()
                .is_some_and(|host| host.eq_ignore_ascii_case(&self.options.internal_host)),
            Err(_) => false,
        }
    }
}

#[inline]
fn is_too_short(candidate: &str) -> bool {
    // A char is at most 4 bytes, so only short candidates need counting.
    candidate.len() < MIN_CANDIDATE_CHARS
        || (candidate.len() < MIN_CANDIDATE_CHARS * 4
            && candidate.chars().count() < MIN_CANDIDATE_CHARS)
}

/// Exactly one `@`, and not the first byte (handles like `@example.org`).
#[inline]
fn is_email(bytes: &[u8]) -> bool {
    match (memchr(b'@', bytes), memrchr(b'@', bytes)) {
        (Some(first), Some(last)) => first >= 1 && first == last,
        _ => false,
    }
}

#[inline]
fn has_mailto_prefix(bytes: &[u8]) -> bool {
    bytes
        .get(..7)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(b"mailto:"))
}
