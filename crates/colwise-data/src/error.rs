//! Error types for the conversion engine.

use std::io;

use thiserror::Error;

/// Errors that can occur while converting a data file.
///
/// Any error aborts the whole conversion; there is no skip-and-continue or
/// partial-batch recovery.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A sparse token lacked the `index:value` separator.
    #[error("malformed sparse token `{0}`")]
    MalformedToken(String),

    /// A sparse token's index did not parse as an integer.
    #[error("invalid feature index in `{token}`")]
    InvalidIndex {
        /// The offending token.
        token: String,
        /// The underlying integer parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// An input line carried no label token.
    #[error("empty input line")]
    EmptyLine,

    /// The configured batch size was zero.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// I/O failure reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
