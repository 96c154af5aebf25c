//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Lakeguard
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be loaded or assembled
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration value is outside its domain
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Two entities in the same discovery batch share a qualified name
    #[error("Duplicate entity in batch: {name}")]
    DuplicateEntity {
        /// The repeated qualified name
        name: String,
    },

    /// A qualified name string does not have three non-empty parts
    #[error("Invalid qualified name '{value}': expected catalog.namespace.name")]
    InvalidQualifiedName {
        /// The rejected input
        value: String,
    },

    /// A required check identifier is not registered
    #[error("Unknown check: {id}")]
    UnknownCheck {
        /// The unrecognised identifier
        id: String,
    },

    /// The evaluation worker pool could not be created
    #[error("Worker pool error: {message}")]
    WorkerPool {
        /// Description of the pool error
        message: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a configuration error without a source
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

/// Configuration values rejected before any entity is evaluated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Numeric value outside its allowed range
    #[error("{key} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Configuration key
        key: &'static str,
        /// Rejected value
        value: String,
        /// Inclusive lower bound
        min: String,
        /// Inclusive upper bound
        max: String,
    },

    /// Value that must be strictly positive was zero
    #[error("{key} must be greater than zero")]
    Zero {
        /// Configuration key
        key: &'static str,
    },

    /// Required string or list is empty
    #[error("{key} cannot be empty")]
    Empty {
        /// Configuration key
        key: &'static str,
    },

    /// Pattern that cannot be compiled
    #[error("invalid pattern '{pattern}' in {key}: {reason}")]
    InvalidPattern {
        /// Configuration key
        key: &'static str,
        /// The rejected pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// Test fixture threshold larger than the production threshold
    #[error(
        "test_size_threshold_bytes ({test}) must not exceed size_threshold_bytes ({production})"
    )]
    TestThresholdAboveProduction {
        /// Test fixture threshold
        test: u64,
        /// Production threshold
        production: u64,
    },
}
