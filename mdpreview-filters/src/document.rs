//! Line source and document packing
//!
//! The pipeline works on lines that keep their line endings. [`split_lines`] produces them from
//! source text and [`DocumentTemplate::pack`] wraps the filtered lines with a header and footer.

use crate::pipeline::Pipeline;

const DEFAULT_HEADER: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Markdown Preview</title>\n\
</head>\n\
<body>\n";

const DEFAULT_FOOTER: &str = "</body>\n</html>\n";

/// Split `source` into lines, each keeping its trailing `\n`.
///
/// `\r\n` endings are normalized to `\n`. A final line without a newline is kept as is, and
/// empty input yields no lines.
pub fn split_lines(source: &str) -> Vec<String> {
    source
        .split_inclusive('\n')
        .map(|line| match line.strip_suffix("\r\n") {
            Some(body) => format!("{body}\n"),
            None => line.to_string(),
        })
        .collect()
}

/// Constant blocks placed around the converted body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTemplate {
    pub header: String,
    pub footer: String,
}

impl Default for DocumentTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER, DEFAULT_FOOTER)
    }
}

impl DocumentTemplate {
    pub fn new(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Header, then `body`, then footer. Neither block is touched.
    pub fn pack(&self, body: Vec<String>) -> Vec<String> {
        let mut packed = Vec::with_capacity(body.len() + 2);
        packed.push(self.header.clone());
        packed.extend(body);
        packed.push(self.footer.clone());
        packed
    }
}

/// Convert Markdown source into a complete HTML document with the standard pipeline.
pub fn render_html(source: &str, template: &DocumentTemplate) -> String {
    render_html_with(source, template, Pipeline::standard())
}

/// Same as [`render_html`] with a caller-built pipeline.
pub fn render_html_with(source: &str, template: &DocumentTemplate, pipeline: Pipeline) -> String {
    let body = pipeline.run(split_lines(source));
    tracing::debug!(lines = body.len(), "packing document");
    template.pack(body).concat()
}
