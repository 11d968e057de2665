//! Shared configuration loader for mdpreview.
//!
//! `defaults/mdpreview.default.toml` is embedded into every binary so that docs and runtime
//! behavior stay in sync. Applications layer user-specific files on top of those defaults via
//! [`Loader`] before deserializing into [`MdPreviewConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdpreview_filters::DocumentTemplate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/mdpreview.default.toml");

/// Top-level configuration consumed by mdpreview applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdPreviewConfig {
    pub output: OutputConfig,
    pub template: TemplateConfig,
    pub preview: PreviewConfig,
}

/// Where converted files land.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub directory: String,
    pub extension: String,
}

/// Header and footer wrapped around every converted document.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub header: String,
    pub footer: String,
    #[serde(default)]
    pub header_path: Option<PathBuf>,
    #[serde(default)]
    pub footer_path: Option<PathBuf>,
}

impl TemplateConfig {
    /// Build the document template, reading `header_path`/`footer_path` when set.
    pub fn resolve(&self) -> Result<DocumentTemplate, ConfigError> {
        let header = read_or(&self.header_path, &self.header)?;
        let footer = read_or(&self.footer_path, &self.footer)?;
        Ok(DocumentTemplate::new(header, footer))
    }
}

fn read_or(path: &Option<PathBuf>, inline: &str) -> Result<String, ConfigError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|err| {
            ConfigError::Message(format!(
                "failed to read template '{}': {err}",
                path.display()
            ))
        }),
        None => Ok(inline.to_string()),
    }
}

/// Browser preview after conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub open: bool,
    pub browser: String,
}

impl PreviewConfig {
    /// The configured browser, or `None` for the platform opener.
    pub fn browser(&self) -> Option<&str> {
        let browser = self.browser.trim();
        (!browser.is_empty()).then_some(browser)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdPreviewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdPreviewConfig, ConfigError> {
    Loader::new().build()
}

/// The embedded default configuration, as shipped.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
