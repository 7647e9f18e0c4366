//! Toastrack error types
//!
//! Toast operations themselves never fail; these errors only come out of
//! configuration loading and strict parsing helpers.

use thiserror::Error;

/// Configuration and parsing errors
#[derive(Error, Debug)]
pub enum ToastError {
    /// Failed to read a configuration file
    #[error("Failed to read toast config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has wrongly typed fields
    #[error("Invalid toast config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unknown placement name
    #[error("Unknown toast placement '{0}'")]
    InvalidPlacement(String),

    /// A configuration value is out of range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Result type for toastrack configuration operations
pub type Result<T> = std::result::Result<T, ToastError>;
