//! Error types for the payroll dispatch engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while dispatching and paying records.

use thiserror::Error;

/// The main error type for the payroll dispatch engine.
///
/// All fallible operations in the crate return this error type.
///
/// # Example
///
/// ```
/// use payroll_dispatch::error::PayrollError;
///
/// let error = PayrollError::UnsupportedKind {
///     kind: "contractor".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported pay kind: contractor");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A record's discriminant has no corresponding payable variant.
    #[error("Unsupported pay kind: {kind}")]
    UnsupportedKind {
        /// The tag that could not be mapped.
        kind: String,
    },

    /// A field required by the record's kind was absent.
    #[error("Record '{name}' is missing required field '{field}'")]
    MissingField {
        /// The payee name on the record.
        name: String,
        /// The field that was absent.
        field: String,
    },

    /// A record field held a value the engine cannot pay on.
    #[error("Invalid field '{field}' on record '{name}': {message}")]
    InvalidRecord {
        /// The payee name on the record.
        name: String,
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A notifier could not deliver a payment notice.
    #[error("Failed to deliver pay to '{name}': {message}")]
    DeliveryFailed {
        /// The payee whose notice failed.
        name: String,
        /// A description of the delivery failure.
        message: String,
    },

    /// Adding a payment to the run's gross pay overflowed.
    #[error("Gross pay overflowed while paying '{name}'")]
    TotalOverflow {
        /// The payee whose amount could not be added.
        name: String,
    },

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

    /// No roster record exists with the requested name.
    #[error("Record not found: {name}")]
    RecordNotFound {
        /// The name that was looked up.
        name: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
