//! Loading and validating API descriptions.
//!
//! A document goes through four passes: parse into an untyped tree, expand
//! shorthand field definitions, build the canonical model with type checks,
//! then check cross-references. Each load either returns a complete
//! [`ApiSpec`] or the first error found; no partial model escapes.

mod build;
mod integrity;
mod node;
mod normalize;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::ApiSpec;

pub use node::ROOT;

/// Concrete syntax of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// `.json` selects JSON; every other extension, or none, selects YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::Json => "JSON",
            SourceFormat::Yaml => "YAML",
        }
    }
}

/// Load a document from disk, selecting the syntax by extension.
pub fn load_path(path: &Path) -> Result<ApiSpec, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loading API description");
    load_str(&text, SourceFormat::from_path(path))
}

/// Load a document from raw bytes.
pub fn load_bytes(bytes: &[u8], format: SourceFormat) -> Result<ApiSpec, ConfigError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ConfigError::Parse {
        format: format.name().to_string(),
        message: e.to_string(),
    })?;
    load_str(text, format)
}

/// Load a document from text.
pub fn load_str(text: &str, format: SourceFormat) -> Result<ApiSpec, ConfigError> {
    let mut document = parse(text, format)?;
    normalize::normalize(&mut document)?;
    let spec = build::build(&node::Node::root(&document))?;
    integrity::check(&spec)?;

    debug!(
        project = %spec.project.name,
        models = spec.models.len(),
        endpoints = spec.endpoints.len(),
        "API description validated"
    );
    Ok(spec)
}

fn parse(text: &str, format: SourceFormat) -> Result<Value, ConfigError> {
    let parsed = match format {
        SourceFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        SourceFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| ConfigError::Parse {
        format: format.name().to_string(),
        message,
    })
}
