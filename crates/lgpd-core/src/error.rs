//! # Error Types
//!
//! The evaluator itself cannot fail. Errors only arise at the edges:
//! parsing user-supplied answer tokens, loading configuration, and
//! reading the register template from disk.

use thiserror::Error;

/// Top-level error type for the triage crates.
#[derive(Error, Debug)]
pub enum LgpdError {
    /// A yes/no answer token could not be parsed.
    #[error("invalid answer {value:?} for {field}: expected yes or no")]
    InvalidAnswer {
        /// The questionnaire field being answered.
        field: String,
        /// The rejected token.
        value: String,
    },

    /// A company-size token did not match any known option.
    #[error("invalid company size {0:?}: expected one of micro, small_business, startup, medium_business, other")]
    InvalidCompanySize(String),

    /// Configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
