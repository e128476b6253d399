//! Directive expansion
//!
//! Replaces every `#!include(name)` with the partial's content, expanding
//! nested directives inside partials first. Recursion is explicit and bounded
//! by `max_depth`, so an include cycle fails with a clear error instead of
//! exhausting the stack.

use crate::directive::find_directives;
use crate::error::{IncludeError, Result};
use crate::partial::PartialSource;
use tracing::debug;

/// Default bound on partial nesting
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

pub struct Expander<'s, S: PartialSource + ?Sized> {
    source: &'s S,
    max_depth: usize,
}

impl<'s, S: PartialSource + ?Sized> Expander<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            max_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Expand all directives in `text`. Text without directives comes back unchanged.
    pub fn expand(&self, text: &str) -> Result<String> {
        let mut chain = Vec::new();
        self.expand_nested(text, &mut chain)
    }

    /// `chain` holds the names of the partials currently being expanded,
    /// outermost first; its length is the current nesting depth.
    fn expand_nested(&self, text: &str, chain: &mut Vec<String>) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for directive in find_directives(text) {
            out.push_str(&text[cursor..directive.span.start]);

            if chain.len() >= self.max_depth {
                let mut chain = chain.clone();
                chain.push(directive.name.to_string());
                return Err(IncludeError::RecursionLimitExceeded {
                    name: directive.name.to_string(),
                    depth: self.max_depth,
                    chain,
                });
            }

            debug!(partial = directive.name, depth = chain.len() + 1, "including partial");
            let partial = self.source.load(directive.name)?;

            chain.push(partial.name);
            let body = self.expand_nested(&partial.content, chain)?;
            chain.pop();

            out.push_str(&indent_lines(&body, directive.indent));
            cursor = directive.span.end;
        }

        out.push_str(&text[cursor..]);
        Ok(out)
    }
}

/// Prefix every line start with `indent`, the first line and the position
/// after a trailing newline included.
pub fn indent_lines(body: &str, indent: &str) -> String {
    if indent.is_empty() {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len() + indent.len() * (body.lines().count() + 1));
    out.push_str(indent);
    for (i, line) in body.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            out.push_str(indent);
        }
        out.push_str(line);
    }
    out
}
