//! Markdown to HTML through a chain of line filters
//!
//!     This crate turns a Markdown document into HTML by pushing its lines through an ordered
//!     pipeline of small, stateful filters. Each filter owns exactly one Markdown construct
//!     (paragraphs, fenced code blocks, inline code, lists, headers, bold, emphasis) and performs
//!     one full pass over the document. The output of one pass is the input of the next.
//!
//!     This is not a CommonMark implementation. There is no tree, no inline parser and no
//!     backtracking: every filter sees a flat `Vec<String>` and rewrites lines in place, keeping
//!     the line count unchanged. Unmatched delimiters are never reported, they simply leave a
//!     span open until the end of the document.
//!
//!     The library is shell agnostic: it never prints. File I/O lives in [`publish`], and the
//!     optional browser launch lives in [`preview`] behind the `preview` feature.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── filter.rs               # Filter trait + the closed set of filter kinds
//!     ├── fence.rs                # Code-fence awareness shared by most filters
//!     ├── filters
//!     │   ├── paragraph.rs
//!     │   ├── code_fence.rs
//!     │   ├── inline_code.rs
//!     │   ├── list.rs
//!     │   ├── header.rs
//!     │   ├── toggle.rs           # Delimiter toggling shared by bold/emphasis
//!     │   ├── bold.rs
//!     │   └── emphasis.rs
//!     ├── pipeline.rs             # Fixed filter order and the runner
//!     ├── document.rs             # Line splitting and header/footer packing
//!     ├── publish.rs              # Input file → sibling html/ file
//!     └── preview.rs              # Browser launch
//!
//! Filter Order
//!
//!     The order is part of the correctness of the output and is spelled out in
//!     [`filter::PIPELINE_ORDER`]. Two constraints matter:
//!
//!     - Paragraph runs first, so its blank-line scan sees the raw document.
//!     - Bold runs before Emphasis, since `**` and `__` would otherwise be eaten one
//!       character at a time as two emphasis toggles.
//!
//!     Fenced blocks are located once, on the raw input, before any filter runs. The markers the
//!     code-fence filter emits are never read back.
//!
//! State
//!
//!     Filters carry state across lines (open spans, list depth, fence status). A [`Pipeline`]
//!     is therefore consumed by [`Pipeline::run`]: build a new one for every document.

pub mod document;
pub mod error;
pub mod fence;
pub mod filter;
pub mod filters;
pub mod pipeline;
#[cfg(feature = "preview")]
pub mod preview;
pub mod publish;

pub use document::{render_html, render_html_with, split_lines, DocumentTemplate};
pub use error::ConvertError;
pub use filter::{Filter, FilterKind, PIPELINE_ORDER};
pub use pipeline::Pipeline;
pub use publish::{publish, PublishResult, PublishSpec};

/// Runs the standard pipeline over a line sequence.
///
/// Shorthand for `Pipeline::standard().run(lines)`.
pub fn filter_lines(lines: Vec<String>) -> Vec<String> {
    Pipeline::standard().run(lines)
}
