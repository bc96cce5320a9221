//! Hilite is a tiny syntax-highlighting file viewer for the terminal,
//! written in Rust.
//!
//! It prints a source file to stdout with ANSI true-color sequences
//! wrapped around keywords, strings, comments and numbers. The language
//! is picked by file extension (`cpp`/`hpp`/`c`/`h` and `py`); any other
//! extension prints verbatim.
//!
//! Here is how to use hilite as a library:
//!
//! **Add hilite into Cargo.toml**
//!
//! ```no-run
//! [dependencies]
//! hilite = "0.1"
//! ```
//!
//! **Use hilite functions**
//!
//! ```no-run
//! let rules = hilite::rules_for("py");
//! assert_eq!(rules.len(), 5);
//!
//! let colored = hilite::highlight_line("x = 1  # one", rules);
//! println!("{}", colored);
//!
//! // unknown extensions leave lines untouched
//! let plain = hilite::highlight_line("x = 1", hilite::rules_for("txt"));
//! assert_eq!(plain, "x = 1");
//! ```
#[macro_use]
extern crate lazy_static;

pub mod highlight;
pub mod libs;
pub mod rules;
pub mod tlog;
pub mod tools;

mod types;

pub use types::{HighlightRule, Spans, Style};

/// Rule table for a file extension. Unknown extensions get an empty
/// table.
pub fn rules_for(ext: &str) -> &'static [HighlightRule] {
    rules::rules_for(ext)
}

/// Highlight one line with the given rules. Returns the line with ANSI
/// color sequences inserted, without a trailing newline.
pub fn highlight_line(line: &str, rules: &[HighlightRule]) -> String {
    highlight::paint(line, rules)
}
