//! Error types for option parsing and serialization.
//!
//! The default tables themselves cannot fail. Errors only come from the
//! edges: parsing a target name, inspecting the dev URL, or rendering a
//! record for output.

use thiserror::Error;

/// Result type alias for option operations
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Main error type for all option operations
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Unrecognized packaging target name
    #[error("Unknown packaging target: {name}. Valid targets: {valid}")]
    UnknownTarget {
        /// Name that failed to parse
        name: String,
        /// Comma-separated list of accepted names
        valid: String,
    },

    /// Unrecognized output format
    #[error("Unknown output format: {name}. Valid formats: {valid}")]
    UnknownFormat {
        /// Name that failed to parse
        name: String,
        /// Comma-separated list of accepted names
        valid: String,
    },

    /// Unknown field requested from a record
    #[error("Unknown option field: {name}")]
    UnknownField {
        /// Requested field name
        name: String,
    },

    /// URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL parsed but carries no host
    #[error("URL has no host: {url}")]
    MissingHost {
        /// Offending URL
        url: String,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
