//! Error types for loading API descriptions and generating targets.
//!
//! Every variant carries the document path or target identifier needed to act
//! on it. Document paths use dotted keys and bracketed indices, for example
//! `models.User.fields.email.type` or `endpoints[1].operations[0]`.

use thiserror::Error;

use crate::generator::targets::TargetKind;

/// Failure to turn a raw document into a canonical model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid {format} document: {message}")]
    Parse { format: String, message: String },

    #[error("Invalid field definition at '{path}': expected a type name or a mapping, found {found}")]
    InvalidFieldShape { path: String, found: String },

    #[error("Validation failed at '{path}': {constraint}")]
    Validation { path: String, constraint: String },

    #[error("Missing required value at '{path}'")]
    MissingRequired { path: String },
}

impl ConfigError {
    /// Document path the error points at, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::Read { .. } | ConfigError::Parse { .. } => None,
            ConfigError::InvalidFieldShape { path, .. }
            | ConfigError::Validation { path, .. }
            | ConfigError::MissingRequired { path } => Some(path),
        }
    }
}

/// Failure while producing a target's files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("No target requested: pass a backend and/or a frontend")]
    NoTargetRequested,

    #[error("Unsupported {kind} target '{identifier}' (supported: {supported})")]
    UnsupportedTarget {
        kind: TargetKind,
        identifier: String,
        supported: String,
    },

    #[error("Failed to load templates from '{path}': {message}")]
    TemplateLoad { path: String, message: String },

    #[error("Target '{target}' failed to render '{artifact}': {message}")]
    Render {
        target: String,
        artifact: String,
        message: String,
    },

    #[error("Target '{target}' failed to write '{path}': {message}")]
    Write {
        target: String,
        path: String,
        message: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Invalid settings in '{path}': {message}")]
    Settings { path: String, message: String },
}
