//! Shared configuration loader for the svgx toolchain.
//!
//! `defaults/svgx.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`SvgxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use svgx_extract::{
    ConvertOptions, ExtractOptions, PreviewError, PreviewOptions, PreviewTheme,
};

const DEFAULT_TOML: &str = include_str!("../defaults/svgx.default.toml");

/// Top-level configuration consumed by svgx applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SvgxConfig {
    pub extract: ExtractConfig,
    pub preview: PreviewConfig,
}

/// Extraction-related knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub recursive: bool,
}

impl From<&ExtractConfig> for ExtractOptions {
    fn from(config: &ExtractConfig) -> Self {
        ExtractOptions {
            recursive: config.recursive,
        }
    }
}

/// Preview document knobs. The theme is kept as a string here; applications
/// resolve it through [`PreviewConfig::options`] so that an unknown name
/// surfaces as a normal error instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub theme: String,
    pub show_markup: bool,
    pub show_attributes: bool,
}

impl PreviewConfig {
    /// Resolve this section into renderer options.
    pub fn options(&self, convert: ConvertOptions) -> Result<PreviewOptions, PreviewError> {
        Ok(PreviewOptions {
            theme: PreviewTheme::from_name(&self.theme)?,
            show_markup: self.show_markup,
            show_attributes: self.show_attributes,
            convert,
        })
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
    pub fn build(self) -> Result<SvgxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SvgxConfig, ConfigError> {
    Loader::new().build()
}
