//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine reports: configuration problems and
//! precondition violations on payroll inputs.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The working-hours engine never fails; every fallible operation in the
/// payroll engine and the configuration layer returns this error type.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "base_salary".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input 'base_salary': must not be negative");
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

    /// An income-tax bracket table is structurally invalid.
    #[error("Invalid income tax table: {message}")]
    InvalidTaxTable {
        /// What made the table invalid.
        message: String,
    },

    /// No income-tax table is in force on the given date.
    #[error("No income tax table in force on {date}")]
    TaxTableNotFound {
        /// The date for which a table was requested.
        date: NaiveDate,
    },

    /// A payroll input violated one of the engine's preconditions.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of the violated precondition.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
