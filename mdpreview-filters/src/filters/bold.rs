//! Bold spans (`**` and `__`)

use super::toggle::TokenToggle;
use crate::fence::map_outside_fences;
use crate::filter::Filter;

pub const BOLD_TOKENS: &[&str] = &["**", "__"];

#[derive(Debug)]
pub struct BoldFilter {
    toggle: TokenToggle,
}

impl Default for BoldFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoldFilter {
    pub fn new() -> Self {
        Self {
            toggle: TokenToggle::new(BOLD_TOKENS, "<b>", "</b>"),
        }
    }

    pub fn is_open(&self) -> bool {
        self.toggle.is_open()
    }
}

impl Filter for BoldFilter {
    fn name(&self) -> &str {
        "bold"
    }

    fn description(&self) -> &str {
        "** and __ spans become <b>"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        map_outside_fences(lines, verbatim, |line| self.toggle.rewrite(line))
    }
}
