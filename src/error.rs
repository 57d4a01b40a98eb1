//! Errors raised while reading coefficients.

use thiserror::Error;

/// Result type alias using this crate's Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Reading from the input or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all three coefficients were read
    #[error("missing coefficient {name}: expected three integers a, b and c")]
    MissingCoefficient { name: char },

    /// A token could not be read as a 32-bit integer
    #[error("invalid coefficient {name}: {token:?} is not a 32-bit integer")]
    InvalidCoefficient { name: char, token: String },
}
