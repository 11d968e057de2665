//! Paragraph boundaries from blank lines
//!
//! Works in two passes. The scan collects the indices of whitespace-only lines not flagged in
//! the verbatim mask, so blank lines inside fenced blocks never count; the rewrite replaces each of them according to its position in that list:
//!
//! | Position          | Output          |
//! |-------------------|-----------------|
//! | first             | `<p>`           |
//! | last              | `<\p>`          |
//! | anything between  | `</p>` + `<p>`  |
//!
//! The first rule is checked before the last one, so a document with a single blank line only
//! gets an opening tag. The closing marker is the literal `<\p>` token.

use crate::filter::Filter;

pub const PARAGRAPH_OPEN: &str = "<p>\n";
pub const PARAGRAPH_CLOSE: &str = "<\\p>\n";
pub const PARAGRAPH_BREAK: &str = "</p>\n<p>\n";

#[derive(Debug, Default)]
pub struct ParagraphFilter {
    blank_lines: Vec<usize>,
}

impl ParagraphFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices collected by the last scan, in ascending order.
    pub fn blank_lines(&self) -> &[usize] {
        &self.blank_lines
    }

    fn scan(&mut self, lines: &[String], verbatim: &[bool]) {
        self.blank_lines.clear();
        for (idx, line) in lines.iter().enumerate() {
            let fenced = verbatim.get(idx).copied().unwrap_or(false);
            if !fenced && is_blank(line) {
                self.blank_lines.push(idx);
            }
        }
    }

    fn replacement(&self, idx: usize) -> Option<&'static str> {
        let position = self.blank_lines.binary_search(&idx).ok()?;
        let last = self.blank_lines.len() - 1;
        Some(if position == 0 {
            PARAGRAPH_OPEN
        } else if position == last {
            PARAGRAPH_CLOSE
        } else {
            PARAGRAPH_BREAK
        })
    }
}

/// Non-empty and made only of whitespace.
fn is_blank(line: &str) -> bool {
    !line.is_empty() && line.chars().all(char::is_whitespace)
}

impl Filter for ParagraphFilter {
    fn name(&self) -> &str {
        "paragraph"
    }

    fn description(&self) -> &str {
        "Blank lines become paragraph boundaries"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        self.scan(&lines, verbatim);
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| match self.replacement(idx) {
                Some(tag) => tag.to_string(),
                None => line,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn two_blank_lines_open_then_close() {
        let out = ParagraphFilter::new().filter(lines(&["a\n", "\n", "b\n", "\n", "c\n"]));
        assert_eq!(out, vec!["a\n", "<p>\n", "b\n", "<\\p>\n", "c\n"]);
    }

    #[test]
    fn middle_blank_lines_break_paragraphs() {
        let out = ParagraphFilter::new().filter(lines(&["\n", "a\n", "  \n", "b\n", "\t\n"]));
        assert_eq!(out, vec!["<p>\n", "a\n", "</p>\n<p>\n", "b\n", "<\\p>\n"]);
    }

    #[test]
    fn single_blank_line_only_opens() {
        let out = ParagraphFilter::new().filter(lines(&["a\n", "\n", "b\n"]));
        assert_eq!(out, vec!["a\n", "<p>\n", "b\n"]);
    }

    #[test]
    fn no_blank_lines_no_tags() {
        let input = lines(&["a\n", "b\n"]);
        let out = ParagraphFilter::new().filter(input.clone());
        assert_eq!(out, input);
    }

    #[test]
    fn blank_lines_inside_fences_are_ignored() {
        let mut filter = ParagraphFilter::new();
        let out = filter.filter(lines(&["\n", "```\n", "\n", "```\n", "\n"]));
        assert_eq!(filter.blank_lines(), &[0, 4]);
        assert_eq!(out, vec!["<p>\n", "```\n", "\n", "```\n", "<\\p>\n"]);
    }

    #[test]
    fn blank_lines_follow_the_given_mask() {
        let mut filter = ParagraphFilter::new();
        let out = filter.apply(lines(&["\n", "\n", "\n"]), &[false, true, false]);
        assert_eq!(out, vec!["<p>\n", "\n", "<\\p>\n"]);
    }

    #[test]
    fn scan_is_reset_between_calls() {
        let mut filter = ParagraphFilter::new();
        filter.filter(lines(&["\n", "\n"]));
        filter.filter(lines(&["a\n"]));
        assert!(filter.blank_lines().is_empty());
    }
}
