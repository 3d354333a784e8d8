//! Core error types for studymate-core.
//!
//! The search engine and the timer state machine are total and never fail.
//! Everything around them (data access, configuration, record validation)
//! reports through the hierarchy below.

use std::path::PathBuf;
use thiserror::Error;

use crate::data::Table;

/// Core error type for studymate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Data-access errors
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors surfaced by a [`DataStore`](crate::data::DataStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No record with this id in the table
    #[error("No record with id {id} in {table}")]
    NotFound { table: Table, id: u64 },

    /// Record kind does not belong in the table
    #[error("Record kind does not match table {table}")]
    WrongKind { table: Table },

    /// Account already registered
    #[error("An account already exists for {0}")]
    AlreadyExists(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotAuthenticated,

    /// Record or credential validation failed
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was blank
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingField(field.to_string())
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
