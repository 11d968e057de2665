//! Fenced code blocks
//!
//! Rewrites each fence delimiter into the block open or close marker. The open/closed flag is
//! owned by the filter and is never reset mid-run; every delimiter flips it.

use crate::fence::{is_fence_delimiter, BLOCK_CLOSE, BLOCK_OPEN};
use crate::filter::Filter;

#[derive(Debug, Default)]
pub struct CodeFenceFilter {
    in_block: bool,
}

impl CodeFenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn filter_line(&mut self, line: String) -> String {
        if !is_fence_delimiter(&line) {
            return line;
        }
        self.in_block = !self.in_block;
        if self.in_block {
            BLOCK_OPEN.to_string()
        } else {
            BLOCK_CLOSE.to_string()
        }
    }
}

impl Filter for CodeFenceFilter {
    fn name(&self) -> &str {
        "code-fence"
    }

    fn description(&self) -> &str {
        "``` delimiters become <pre><code> blocks"
    }

    fn apply(&mut self, lines: Vec<String>, _verbatim: &[bool]) -> Vec<String> {
        lines
            .into_iter()
            .map(|line| self.filter_line(line))
            .collect()
    }
}
