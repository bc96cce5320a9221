use std::ops::Range;

use crate::libs::colored;
use crate::types::{HighlightRule, Spans, Style};

/// Scan one line into spans, classifying each byte range as plain text
/// or as a colored token.
///
/// The scanner keeps a cursor over the unprocessed suffix of the line.
/// Each round, every rule is searched against that suffix and the match
/// starting at the smallest offset wins; on identical offsets the rule
/// listed first in the table wins (the strict less-than below). There is
/// no length tie-break. The cursor then jumps past the winning match and
/// the whole table is searched again from scratch.
///
/// Re-scanning the shrinking suffix is O(rules * remaining) per round.
/// That is fine for line-oriented use; an incremental matcher would not
/// keep the same tie-break order.
pub fn scan(line: &str, rules: &[HighlightRule]) -> Spans {
    let mut spans: Spans = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let remaining = &line[pos..];

        // offsets here are relative to `remaining`, not to `line`
        let mut earliest: Option<(Range<usize>, &'static str)> = None;
        for rule in rules {
            if let Some(m) = rule.pattern.find(remaining) {
                let is_earlier = match earliest {
                    Some((ref found, _)) => m.start() < found.start,
                    None => true,
                };
                if is_earlier {
                    earliest = Some((m.start()..m.end(), rule.color));
                }
            }
        }

        match earliest {
            Some((found, color)) => {
                if found.start > 0 {
                    spans.push((pos..pos + found.start, Style::Default));
                }
                spans.push((pos + found.start..pos + found.end, Style::AnsiColor(color)));
                pos += found.end;
            }
            None => {
                spans.push((pos..line.len(), Style::Default));
                break;
            }
        }
    }

    spans
}

/// Render one line with its colors applied. Plain spans come out
/// byte-identical to the source; colored spans are wrapped in the rule's
/// color prefix and a reset. No trailing newline.
pub fn paint(line: &str, rules: &[HighlightRule]) -> String {
    let mut out = String::new();
    for (range, style) in scan(line, rules) {
        match style {
            Style::Default => out.push_str(&line[range]),
            Style::AnsiColor(color) => {
                out.push_str(color);
                out.push_str(&line[range]);
                out.push_str(colored::RESET);
            }
        }
    }
    out
}
