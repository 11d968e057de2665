//! Error types for conversion and publishing

use std::path::PathBuf;

/// Errors raised around the pipeline.
///
/// The filters themselves never fail: malformed Markdown yields deterministic output. Every
/// variant here comes from the collaborators (file system, browser launch) or from input
/// the publisher cannot work with.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Error reading file '{}': {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No browser found: {0}")]
    BrowserNotFound(String),

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
