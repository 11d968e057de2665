//! Document publishing.
//!
//! Bridges the pipeline and the file system: read a Markdown file, convert it, and write the
//! result next to it in a sibling `html/` directory with the same stem and an `.html`
//! extension. Any file already at that path is replaced and the directory is created if needed.

use crate::document::{render_html_with, DocumentTemplate};
use crate::error::ConvertError;
use crate::filter::FilterKind;
use crate::pipeline::Pipeline;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "html";
pub const DEFAULT_EXTENSION: &str = "html";

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new("notes/todo.md")
///     .with_template(DocumentTemplate::new(header, footer))
///     .with_output_dir("site");
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec {
    /// Markdown source file.
    pub input: PathBuf,
    /// Header and footer wrapped around the converted body.
    pub template: DocumentTemplate,
    /// Name of the directory created next to the input.
    pub output_dir: String,
    /// Extension of the written file, without the leading dot.
    pub extension: String,
    /// Filters left out of the standard pipeline.
    pub skip: Vec<FilterKind>,
}

impl PublishSpec {
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            template: DocumentTemplate::default(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            skip: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: DocumentTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn skipping(mut self, kind: FilterKind) -> Self {
        if !self.skip.contains(&kind) {
            self.skip.push(kind);
        }
        self
    }

    /// Where [`publish`] writes the converted document.
    pub fn output_path(&self) -> Result<PathBuf, ConvertError> {
        html_output_path(&self.input, &self.output_dir, &self.extension)
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// Path of the written HTML file.
    pub path: PathBuf,
    /// Number of lines written, header and footer included.
    pub lines: usize,
}

/// Sibling output path for `input`: `<parent>/<dir>/<stem>.<extension>`.
pub fn html_output_path(
    input: &Path,
    dir: &str,
    extension: &str,
) -> Result<PathBuf, ConvertError> {
    let stem = input.file_stem().ok_or_else(|| {
        ConvertError::InvalidInput(format!("'{}' has no file name", input.display()))
    })?;
    let mut file_name = OsString::from(stem);
    file_name.push(".");
    file_name.push(extension);

    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    Ok(parent.join(dir).join(file_name))
}

/// Read the Markdown source at `path`.
fn read_source(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert the input of `spec` to a complete HTML string without writing anything.
pub fn render(spec: &PublishSpec) -> Result<String, ConvertError> {
    let source = read_source(&spec.input)?;
    Ok(render_html_with(
        &source,
        &spec.template,
        Pipeline::without(&spec.skip),
    ))
}

/// Convert the input of `spec` and write it to [`PublishSpec::output_path`].
///
/// # Errors
///
/// Returns [`ConvertError`] if:
/// - The input has no file name or cannot be read
/// - The output directory cannot be created
/// - An existing output file cannot be removed, or the new one cannot be written
pub fn publish(spec: PublishSpec) -> Result<PublishResult, ConvertError> {
    let path = spec.output_path()?;
    let html = render(&spec)?;
    let lines = html.lines().count();
    write_to_path(&path, html)?;
    tracing::info!(input = %spec.input.display(), output = %path.display(), "published");
    Ok(PublishResult { path, lines })
}

fn write_to_path(path: &Path, contents: String) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if path.exists() {
        fs::remove_file(path).map_err(write_error)?;
    }
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(write_error)
}
