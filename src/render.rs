//! Output assembly.
//!
//! Copies untouched spans of the input verbatim and writes an anchor for
//! every replacement. Nothing is HTML-escaped.

use crate::{Options, Replacement, ReplacementKind};

/// HTML output writer over a growable string buffer.
///
/// # Example
/// ```
/// use linkernizer::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.write_anchor("https://www.example.org", "", false, "www.example.org");
/// assert_eq!(
///     writer.into_string(),
///     "<a href=\"https://www.example.org\">www.example.org</a>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create with capacity for the input plus room for a few anchors.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 2 + 64)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Write into an existing buffer, keeping its allocation.
    #[inline]
    pub fn from_buffer(mut out: String) -> Self {
        out.clear();
        Self { out }
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `<a href="{href_prefix}{href}"[ target="_blank"]>{text}</a>`.
    #[inline]
    pub fn write_anchor(&mut self, href: &str, href_prefix: &str, new_tab: bool, text: &str) {
        self.out.push_str("<a href=\"");
        self.out.push_str(href_prefix);
        self.out.push_str(href);
        if new_tab {
            self.out.push_str("\" target=\"_blank\">");
        } else {
            self.out.push_str("\">");
        }
        self.out.push_str(text);
        self.out.push_str("</a>");
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Write the anchor for one replacement.
#[inline]
fn write_replacement(
    writer: &mut HtmlWriter,
    slice: &str,
    kind: ReplacementKind,
    options: &Options,
) {
    let href_prefix = match kind {
        ReplacementKind::InternalWithScheme
        | ReplacementKind::ExternalWithScheme
        | ReplacementKind::EmailWithScheme => "",
        ReplacementKind::InternalWithoutScheme | ReplacementKind::ExternalWithoutScheme => {
            options.default_scheme.as_str()
        }
        ReplacementKind::EmailWithoutScheme => "mailto:",
    };
    writer.write_anchor(slice, href_prefix, kind.opens_new_tab(), slice);
}

/// Render `input` with every replacement swapped for its anchor.
///
/// `replacements` must be sorted by start and non-overlapping.
pub fn render_replacements(
    input: &str,
    replacements: &[Replacement],
    options: &Options,
    writer: &mut HtmlWriter,
) {
    let mut pos = 0;

    for replacement in replacements {
        let range = replacement.range;
        debug_assert!(range.start_usize() >= pos, "replacements overlap or are unsorted");

        if range.start_usize() > pos {
            writer.write_str(&input[pos..range.start_usize()]);
        }

        write_replacement(writer, range.slice(input), replacement.kind, options);
        pos = range.end_usize();
    }

    if pos < input.len() {
        writer.write_str(&input[pos..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Range;

    fn render(input: &str, replacements: &[Replacement], options: &Options) -> String {
        let mut writer = HtmlWriter::with_capacity_for(input.len());
        render_replacements(input, replacements, options, &mut writer);
        writer.into_string()
    }

    fn whole(input: &str, kind: ReplacementKind) -> Vec<Replacement> {
        vec![Replacement::new(Range::from_usize(0, input.len()), kind)]
    }

    #[test]
    fn test_templates() {
        let options = Options {
            default_scheme: "http://".to_string(),
            ..Options::default()
        };
        let cases = [
            (
                "https://x.org",
                ReplacementKind::InternalWithScheme,
                "<a href=\"https://x.org\">https://x.org</a>",
            ),
            (
                "www.x.org",
                ReplacementKind::InternalWithoutScheme,
                "<a href=\"http://www.x.org\">www.x.org</a>",
            ),
            (
                "https://x.org",
                ReplacementKind::ExternalWithScheme,
                "<a href=\"https://x.org\" target=\"_blank\">https://x.org</a>",
            ),
            (
                "www.x.org",
                ReplacementKind::ExternalWithoutScheme,
                "<a href=\"http://www.x.org\" target=\"_blank\">www.x.org</a>",
            ),
            (
                "mailto:a@x.org",
                ReplacementKind::EmailWithScheme,
                "<a href=\"mailto:a@x.org\">mailto:a@x.org</a>",
            ),
            (
                "a@x.org",
                ReplacementKind::EmailWithoutScheme,
                "<a href=\"mailto:a@x.org\">a@x.org</a>",
            ),
        ];

        for (input, kind, expected) in cases {
            assert_eq!(render(input, &whole(input, kind), &options), expected, "{kind}");
        }
    }

    #[test]
    fn test_gaps_are_copied() {
        let input = "a www.x.org b c@x.org d";
        let replacements = [
            Replacement::new(Range::new(2, 11), ReplacementKind::InternalWithoutScheme),
            Replacement::new(Range::new(14, 21), ReplacementKind::EmailWithoutScheme),
        ];
        assert_eq!(
            render(input, &replacements, &Options::default()),
            "a <a href=\"https://www.x.org\">www.x.org</a> b <a href=\"mailto:c@x.org\">c@x.org</a> d"
        );
    }

    #[test]
    fn test_adjacent_replacements() {
        let input = "www.x.orgwww.y.org";
        let replacements = [
            Replacement::new(Range::new(0, 9), ReplacementKind::InternalWithScheme),
            Replacement::new(Range::new(9, 18), ReplacementKind::InternalWithScheme),
        ];
        assert_eq!(
            render(input, &replacements, &Options::default()),
            "<a href=\"www.x.org\">www.x.org</a><a href=\"www.y.org\">www.y.org</a>"
        );
    }

    #[test]
    fn test_no_replacements_copies_input() {
        assert_eq!(render("plain text", &[], &Options::default()), "plain text");
    }

    #[test]
    fn test_from_buffer_clears() {
        let mut writer = HtmlWriter::from_buffer(String::from("stale"));
        assert!(writer.is_empty());
        writer.write_str("fresh");
        assert_eq!(writer.as_str(), "fresh");
        assert_eq!(writer.len(), 5);
    }
}
