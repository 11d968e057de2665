//! Emphasis spans (`*` and `_`)
//!
//! Must run after [`BoldFilter`](super::BoldFilter): any `**` still present here becomes two
//! emphasis toggles.

use super::toggle::TokenToggle;
use crate::fence::map_outside_fences;
use crate::filter::Filter;

pub const EMPHASIS_TOKENS: &[&str] = &["*", "_"];

#[derive(Debug)]
pub struct EmphasisFilter {
    toggle: TokenToggle,
}

impl Default for EmphasisFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl EmphasisFilter {
    pub fn new() -> Self {
        Self {
            toggle: TokenToggle::new(EMPHASIS_TOKENS, "<i>", "</i>"),
        }
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }
}

impl Filter for EmphasisFilter {
    fn name(&self) -> &str {
        "emphasis"
    }

    fn description(&self) -> &str {
        "* and _ spans become <i>"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        map_outside_fences(lines, verbatim, |line| self.toggle.rewrite(line))
    }
}
