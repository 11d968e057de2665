//! Filter trait definition
//!
//! This module defines the [`Filter`] trait every Markdown construct implements, and the closed
//! set of filters the pipeline knows about.

use crate::fence::verbatim_mask;
use crate::filters::{
    BoldFilter, CodeFenceFilter, EmphasisFilter, HeaderFilter, InlineCodeFilter, ListFilter,
    ParagraphFilter,
};

/// A single pass over a document.
///
/// Implementors receive the whole line sequence and return a sequence of the same length, where
/// line `i` of the output is the rewritten line `i` of the input. Filters may keep state between
/// lines, so an instance is good for exactly one document.
///
/// [`apply`](Filter::apply) also receives a verbatim mask: `verbatim[i]` is set when line `i` of
/// the source document belongs to a fenced code block. [`Pipeline`](crate::Pipeline) computes it
/// once from the raw input; [`filter`](Filter::filter) computes it from its own input.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Filter for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn apply(&mut self, lines: Vec<String>, _verbatim: &[bool]) -> Vec<String> {
///         lines.into_iter().map(|line| line.to_uppercase()).collect()
///     }
/// }
/// ```
pub trait Filter {
    /// The name of this filter (e.g., "header", "bold")
    fn name(&self) -> &str;

    /// Optional description of this filter
    fn description(&self) -> &str {
        ""
    }

    /// Rewrite the full document, leaving lines flagged in `verbatim` alone where the filter
    /// is fence aware.
    fn apply(&mut self, lines: Vec<String>, verbatim: &[bool]) -> Vec<String>;

    /// Rewrite raw Markdown lines, locating fenced blocks from their delimiters.
    fn filter(&mut self, lines: Vec<String>) -> Vec<String> {
        let verbatim = verbatim_mask(&lines);
        self.apply(lines, &verbatim)
    }
}

/// The filters available to a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Paragraph,
    CodeFence,
    InlineCode,
    List,
    Header,
    Bold,
    Emphasis,
}

/// Order in which the standard pipeline applies its filters.
///
/// - `Paragraph` comes first: it scans blank lines before anything has been rewritten.
/// - `CodeFence` comes right after it. Fence-aware filters do not depend on its output: they
///   get the verbatim mask scanned from the raw input.
/// - `Bold` comes before `Emphasis`: `**`/`__` must be consumed before `*`/`_` can match.
pub const PIPELINE_ORDER: [FilterKind; 7] = [
    FilterKind::Paragraph,
    FilterKind::CodeFence,
    FilterKind::InlineCode,
    FilterKind::List,
    FilterKind::Header,
    FilterKind::Bold,
    FilterKind::Emphasis,
];

impl FilterKind {
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Paragraph => "paragraph",
            FilterKind::CodeFence => "code-fence",
            FilterKind::InlineCode => "inline-code",
            FilterKind::List => "list",
            FilterKind::Header => "header",
            FilterKind::Bold => "bold",
            FilterKind::Emphasis => "emphasis",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FilterKind::Paragraph => "Blank lines become paragraph boundaries",
            FilterKind::CodeFence => "``` delimiters become <pre><code> blocks",
            FilterKind::InlineCode => "`code` spans become <code>",
            FilterKind::List => "* / - / + items become <li>, indentation opens <ul>",
            FilterKind::Header => "# to ###### prefixes become <h1> to <h6>",
            FilterKind::Bold => "** and __ spans become <b>",
            FilterKind::Emphasis => "* and _ spans become <i>",
        }
    }

    /// Look a filter up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<FilterKind> {
        PIPELINE_ORDER.into_iter().find(|kind| kind.name() == name)
    }

    /// A fresh filter instance with empty state.
    pub fn build(&self) -> Box<dyn Filter> {
        match self {
            FilterKind::Paragraph => Box::new(ParagraphFilter::new()),
            FilterKind::CodeFence => Box::new(CodeFenceFilter::new()),
            FilterKind::InlineCode => Box::new(InlineCodeFilter::new()),
            FilterKind::List => Box::new(ListFilter::new()),
            FilterKind::Header => Box::new(HeaderFilter::new()),
            FilterKind::Bold => Box::new(BoldFilter::new()),
            FilterKind::Emphasis => Box::new(EmphasisFilter::new()),
        }
    }
}
