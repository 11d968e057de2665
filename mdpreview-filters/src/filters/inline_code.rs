//! Inline code spans
//!
//! Every backtick outside a fenced block toggles between `<code>` and `</code>`. A span may open
//! on one line and close on a later one. Span content is not escaped.

use super::toggle::TokenToggle;
use crate::fence::map_outside_fences;
use crate::filter::Filter;

#[derive(Debug)]
pub struct InlineCodeFilter {
    toggle: TokenToggle,
}

impl Default for InlineCodeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineCodeFilter {
    pub fn new() -> Self {
        Self {
            toggle: TokenToggle::new(&["`"], "<code>", "</code>"),
        }
    }

    /// Whether a span is still open after the last line processed.
    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }
}

impl Filter for InlineCodeFilter {
    fn name(&self) -> &str {
        "inline-code"
    }

    fn description(&self) -> &str {
        "`code` spans become <code>"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        map_outside_fences(lines, verbatim, |line| self.toggle.rewrite(line))
    }
}
