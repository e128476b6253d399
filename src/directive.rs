//! `#!include(name)` directive scanning
//!
//! A directive starts a line, optionally indented with spaces or tabs:
//!
//! ```text
//!     steps:
//!       #!include(checkout)
//! ```
//!
//! The captured indentation is later applied to every line of the partial.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Leading horizontal whitespace, then `#!include(NAME)`. `(?m)` anchors `^`
/// at every line start, `[^\S\r\n]` keeps the indent capture on one line.
static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?P<indent>[^\S\r\n]*)#!\s*include\((?P<name>[a-zA-Z0-9._-]+)\)")
        .expect("directive regex is valid")
});

/// One parsed directive occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Indentation before `#!` (may be empty)
    pub indent: &'a str,
    /// Partial name between the parentheses
    pub name: &'a str,
    /// Byte range of the whole match, indent included
    pub span: Range<usize>,
}

/// Cheap existence check before doing any expansion work
pub fn has_directives(text: &str) -> bool {
    DIRECTIVE_RE.is_match(text)
}

/// Iterate directives left-to-right, non-overlapping
pub fn find_directives(text: &str) -> impl Iterator<Item = Directive<'_>> {
    DIRECTIVE_RE.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(Directive {
            indent: caps.name("indent").map_or("", |m| m.as_str()),
            name: caps.name("name")?.as_str(),
            span: whole.range(),
        })
    })
}
