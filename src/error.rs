//! Error types for the Settlement Comparator.
//!
//! The comparison itself never fails. Every error here is raised at the
//! boundary: while loading configuration, while turning raw form input into a
//! [`SettlementInput`](crate::models::SettlementInput), or while serving.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Settlement Comparator.
///
/// # Example
///
/// ```
/// use settlement_comparator::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "hire_date".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: hire_date");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required form field was left blank.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the blank field.
        field: String,
    },

    /// A monetary amount was negative or otherwise unusable.
    #[error("Invalid amount for '{field}': {message}")]
    InvalidAmount {
        /// The field holding the amount.
        field: String,
        /// A description of what made the amount invalid.
        message: String,
    },

    /// A date could not be parsed.
    #[error("Invalid date for '{field}': '{value}' (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The field holding the date.
        field: String,
        /// The raw value supplied.
        value: String,
    },

    /// The exit date falls before the hire date.
    #[error("Exit date {exit_date} is before hire date {hire_date}")]
    InvalidDateRange {
        /// The hire date.
        hire_date: NaiveDate,
        /// The exit date.
        exit_date: NaiveDate,
    },

    /// The reason code is not one of the supported tags.
    #[error("Unknown exit reason: {value}")]
    InvalidReason {
        /// The raw value supplied.
        value: String,
    },

    /// The logging subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// An I/O error while serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
