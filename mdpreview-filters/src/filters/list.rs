//! Flat unordered lists
//!
//! An item is a line whose left-trimmed text starts with `* `, `- ` or `+ `. Its indentation
//! level is the number of characters in front of the marker. Comparing that level with the one
//! of the previous item decides the tag that replaces the marker:
//!
//! | Level vs previous | Replacement  |
//! |-------------------|--------------|
//! | deeper            | `<ul><li>`   |
//! | shallower         | `</ul><li>`  |
//! | same              | `<li>`       |
//!
//! The level starts at 0, so top-level items never get a `<ul>`, and nothing closes the last
//! `<ul>` when a nested run reaches the end of the document. Lines that are not items leave the
//! level untouched.

use crate::fence::map_outside_fences;
use crate::filter::Filter;
use std::cmp::Ordering;

pub const LIST_MARKERS: [&str; 3] = ["* ", "- ", "+ "];

#[derive(Debug, Default)]
pub struct ListFilter {
    indent_level: usize,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indentation of the last item seen.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn filter_line(&mut self, line: String) -> String {
        let trimmed = line.trim_start();
        let Some(marker) = LIST_MARKERS
            .into_iter()
            .find(|marker| trimmed.starts_with(marker))
        else {
            return line;
        };

        let indent = &line[..line.len() - trimmed.len()];
        let level = indent.chars().count();
        let tag = match level.cmp(&self.indent_level) {
            Ordering::Greater => "<ul><li>",
            Ordering::Less => "</ul><li>",
            Ordering::Equal => "<li>",
        };
        self.indent_level = level;

        let content = trimmed[marker.len()..].trim_end();
        format!("{indent}{tag}{content}</li>\n")
    }
}

impl Filter for ListFilter {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "* / - / + items become <li>, indentation opens <ul>"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        map_outside_fences(lines, verbatim, |line| self.filter_line(line))
    }
}
