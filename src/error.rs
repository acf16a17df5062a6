//! Errors raised while validating Tversky index inputs.

use thiserror::Error;

/// Validation failures. All of them are raised before any set arithmetic runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TverskyError {
    /// An argument has the wrong shape, e.g. a number where a sequence was required.
    #[error("invalid argument `{argument}`: must be {expected}. Value: `{value}`")]
    InvalidType {
        argument: &'static str,
        expected: &'static str,
        value: String,
    },

    /// One sequence is a string and the other an item list.
    #[error("invalid arguments: sequences must be the same kind (both strings or both arrays), got {first} and {second}")]
    TypeMismatch {
        first: &'static str,
        second: &'static str,
    },

    /// The configuration argument is not a configuration record.
    #[error("invalid configuration: options must be an object. Value: `{value}`")]
    InvalidConfig { value: String },

    /// A tuning weight is negative.
    #[error("invalid option `{argument}`: must be a nonnegative number. Value: `{value}`")]
    InvalidRange { argument: &'static str, value: f64 },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, TverskyError>;
