//! Unified error types for flower-care.
//!
//! The care model itself never fails; errors only come from reading
//! configuration and parsing the textual care-plan notation.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the textual care action / species notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Unknown care action: {0}")]
    UnknownAction(String),

    #[error("Care action `{0}` needs an hour count, e.g. `sunlight(4)`")]
    MissingHours(String),

    #[error("Care action `{0}` takes no argument")]
    UnexpectedArgument(String),

    #[error("Invalid hour count: {0}")]
    InvalidHours(String),

    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for care plan parsing
pub type PlanResult<T> = std::result::Result<T, PlanError>;
