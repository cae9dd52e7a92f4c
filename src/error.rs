//! Error types
//!
//! The simulation itself is infallible; only loading configuration can fail.

use thiserror::Error;

/// Errors that can occur while loading [`Settings`](crate::Settings)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("Failed to read settings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for the settings schema
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value parsed fine but is outside its usable range
    #[error("Invalid setting '{field}': {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
