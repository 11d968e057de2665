//! ATX headers (`#` to `######`)
//!
//! Prefixes are tested longest first, so `### x` is a level 3 header and never a level 1 header
//! with `## x` as its text. Only the start of the raw line is inspected: indented `#` lines and
//! lines already rewritten into HTML never match.
//!
//! The text after the `#` run is trimmed on both ends, so `### Title` renders as
//! `<h3>Title</h3>` and not `<h3> Title</h3>`. Trimming only the trailing side would bring the
//! separating space into every heading.

use crate::fence::map_outside_fences;
use crate::filter::Filter;

/// Deepest heading level first.
const LEVELS: [usize; 6] = [6, 5, 4, 3, 2, 1];

#[derive(Debug, Default)]
pub struct HeaderFilter;

impl HeaderFilter {
    pub fn new() -> Self {
        HeaderFilter
    }
}

/// Heading level of `line` and the text following its `#` run.
fn match_level(line: &str) -> Option<(usize, &str)> {
    LEVELS.into_iter().find_map(|level| {
        let rest = line.strip_prefix(&"#".repeat(level))?;
        Some((level, rest))
    })
}

fn render(line: String) -> String {
    match match_level(&line) {
        Some((level, rest)) => format!("<h{level}>{}</h{level}>\n", rest.trim()),
        None => line,
    }
}

impl Filter for HeaderFilter {
    fn name(&self) -> &str {
        "header"
    }

    fn description(&self) -> &str {
        "# to ###### prefixes become <h1> to <h6>"
    }

    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String> {
        map_outside_fences(lines, verbatim, render)
    }
}
