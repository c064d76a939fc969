//! Fitlog Library
//!
//! A Rust library for ingesting free-form fitness log files and deriving
//! training metrics from them.
//!
//! This library provides tools for:
//! - Parsing delimited training logs with automatic delimiter detection
//! - Resolving bilingual (German/English) column headers onto a canonical schema
//! - Tolerant numeric normalization (locale decimal commas, corrupt cells)
//! - Computing a calorie budget (BMR/TDEE/target) from a user profile
//! - Comparing recent training activity against prior activity
//!
//! The parsing pipeline is deliberately forgiving: a corrupt numeric cell
//! degrades to zero and a malformed row is skipped, so one bad record never
//! invalidates a whole training history. Profile intake is the opposite:
//! budgets are only computed from fully typed [`Profile`](app::models::Profile)
//! values and are never silently defaulted.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod energy_budget;
        pub mod log_parser;
        pub mod progress;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CalorieBudget, Profile, TrainingEntry};
pub use app::services::energy_budget::compute_budget;
pub use app::services::log_parser::{LogParser, ParseResult, ParseStats, parse_log};
pub use app::services::progress::{Insufficient, compare_latest, compare_windows};
pub use config::Config;

/// Result type alias for fitlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for fitlog operations
///
/// Log ingestion itself is total and does not surface errors here; these
/// variants cover the strict paths: configuration, profile intake, and
/// filesystem writes owned by the shell.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Profile file missing
    #[error("No profile found at {path} (run `fitlog profile set` first)")]
    ProfileNotFound { path: String },

    /// Profile file present but not parseable as a complete profile
    #[error("Invalid profile in '{path}': {message}")]
    ProfileFormat { path: String, message: String },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an I/O error with a simple message
    pub fn io_error(message: impl Into<String>) -> Self {
        let message_str = message.into();
        Self::Io {
            message: message_str.clone(),
            source: std::io::Error::other(message_str),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a profile-not-found error
    pub fn profile_not_found(path: impl Into<String>) -> Self {
        Self::ProfileNotFound { path: path.into() }
    }

    /// Create a profile format error
    pub fn profile_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProfileFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
