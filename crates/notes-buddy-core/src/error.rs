//! Error types for the domain crate.
//!
//! - [`SettingsError`] - Rejected pomodoro duration edits
//! - [`GenerateError`] - Content generation failures
//! - [`ConfigError`] - Incomplete test generator configuration
//! - [`StorageError`] - Key-value storage failures
//! - [`CatalogError`] - Malformed compiled-in catalog data

use thiserror::Error;

/// Pomodoro settings errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("duration must be between {min} and {max} minutes, got {got}")]
    OutOfRange { got: u32, min: u32, max: u32 },
}

/// Content generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Prompt or source text was empty after trimming.
    #[error("input is empty")]
    EmptyInput,
    /// Backend failed to produce content.
    #[error("generation failed: {0}")]
    Backend(String),
}

/// Test generator configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required field was left unselected.
    #[error("missing {0}")]
    Missing(&'static str),
    /// A field held a value outside its allowed set.
    #[error("invalid {field}: {value}")]
    Invalid { field: &'static str, value: String },
}

/// Key-value storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage not available")]
    Unavailable,
    #[error("failed to write key {0}")]
    WriteFailed(String),
}

/// Catalog parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("failed to parse {name}: {message}")]
    Parse { name: &'static str, message: String },
}
