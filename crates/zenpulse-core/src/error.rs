//! Core error types for zenpulse-core.
//!
//! Selection and gating are total over their inputs, so nearly everything
//! here is raised at construction time (catalog, affirmation bank) or by the
//! configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for zenpulse-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
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

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Identifier used more than once in a collection
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId { collection: String, id: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// No catalog item with this id
    #[error("Unknown content item: {0}")]
    UnknownItem(String),

    /// Not one of positive, neutral, negative
    #[error("Unknown mood '{0}' (expected positive, neutral or negative)")]
    UnknownMood(String),

    /// Not one of monthly, yearly
    #[error("Unknown plan '{0}' (expected monthly or yearly)")]
    UnknownPlan(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
