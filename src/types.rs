use std::ops::Range;

use regex::Regex;

///
/// One highlighting rule: a pattern over a single line of text, and the
/// ANSI color prefix applied to its matches. The `py` comment rule is:
///
/// HighlightRule {
///     pattern: Regex::new(r"#.*$"),
///     color: "\x1b[38;2;136;136;136m",
/// }
///
/// A rule table is an ordered `Vec<HighlightRule>`; order only matters
/// when two rules match at the same offset (the earlier rule wins).
/// Tables are never mutated after construction.
///
#[derive(Debug)]
pub struct HighlightRule {
    pub pattern: Regex,
    pub color: &'static str,
}

/// How one scanned span of a line is rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Style {
    /// Plain text, printed byte-identical to the source.
    Default,
    /// Wrapped in the given ANSI color prefix and a reset.
    AnsiColor(&'static str),
}

pub type Spans = Vec<(Range<usize>, Style)>;
