//! Error types for configuration, form validation and the generate hand-off
//!
//! Nothing here is fatal to the UI except [`ConfigError`], which is reported
//! before the terminal is taken over. Field and generate errors surface in the
//! status bar and the log.

use std::path::PathBuf;

use thiserror::Error;

use crate::form::FormField;

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid layout limits: {0}")]
    InvalidLimits(String),
}

/// A single form field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Empty(FormField),

    #[error("{} must be a whole number, got '{value}'", .field.label())]
    NotAnInteger { field: FormField, value: String },

    #[error("{} must be greater than zero", .0.label())]
    NotPositive(FormField),
}

impl FieldError {
    /// The field the error refers to
    pub fn field(&self) -> FormField {
        match self {
            FieldError::Empty(field) | FieldError::NotPositive(field) => *field,
            FieldError::NotAnInteger { field, .. } => *field,
        }
    }
}

/// Failures of the generate hand-off
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write hand-off file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
