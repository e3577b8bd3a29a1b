//! Detected spans and their link kinds.

use crate::Range;

/// How a detected candidate is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplacementKind {
    /// Link with a scheme, opened in the same tab.
    InternalWithScheme,
    /// `www.` link, opened in the same tab. The href gets the default scheme.
    InternalWithoutScheme,
    /// Link with a scheme, opened in a new tab.
    ExternalWithScheme,
    /// `www.` link, opened in a new tab. The href gets the default scheme.
    ExternalWithoutScheme,
    /// Email address already written as `mailto:...`.
    EmailWithScheme,
    /// Bare email address. The href gets `mailto:`.
    EmailWithoutScheme,
}

impl ReplacementKind {
    /// Pick the internal or external variant of a link kind.
    #[inline]
    pub const fn link(internal: bool, with_scheme: bool) -> Self {
        match (internal, with_scheme) {
            (true, true) => Self::InternalWithScheme,
            (true, false) => Self::InternalWithoutScheme,
            (false, true) => Self::ExternalWithScheme,
            (false, false) => Self::ExternalWithoutScheme,
        }
    }

    /// Whether the rendered anchor carries `target="_blank"`.
    #[inline]
    pub const fn opens_new_tab(self) -> bool {
        matches!(self, Self::ExternalWithScheme | Self::ExternalWithoutScheme)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InternalWithScheme => "internal-with-scheme",
            Self::InternalWithoutScheme => "internal-without-scheme",
            Self::ExternalWithScheme => "external-with-scheme",
            Self::ExternalWithoutScheme => "external-without-scheme",
            Self::EmailWithScheme => "email-with-scheme",
            Self::EmailWithoutScheme => "email-without-scheme",
        }
    }
}

impl std::fmt::Display for ReplacementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A span of the input that is rewritten as an anchor.
///
/// Replacements for one input are ordered by start offset and never
/// overlap, since each comes from a distinct word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub range: Range,
    pub kind: ReplacementKind,
}

impl Replacement {
    #[inline]
    pub const fn new(range: Range, kind: ReplacementKind) -> Self {
        Self { range, kind }
    }
}
