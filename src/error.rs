/*
    Errors
*/

use thiserror::Error;

/// Errors raised by interval construction, interval arithmetic,
/// the solver, and the text reader.
///
/// Every error aborts the operation that raised it.
/// No partial result is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A token is not a valid decimal literal.
    #[error("malformed numeric literal: {0:?}")]
    Parse(String),

    /// The input ended before the declared system was fully read.
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEndOfInput(&'static str),

    /// The left bound of an explicit interval exceeds its right bound.
    #[error("invalid interval bounds: left {left} exceeds right {right}")]
    InvalidBounds { left: String, right: String },

    /// The divisor is zero or an interval containing zero.
    #[error("division by zero or by an interval containing zero")]
    DivisionByZero,

    /// The diagonal entry of a row is zero (or contains zero).
    #[error("singular pivot in row {row}")]
    SingularPivot { row: usize },

    /// A bare number was mixed into an interval operation in strict mode.
    #[error("cannot mix a plain number into an interval operation in strict mode")]
    StrictModeViolation,

    /// The element type selector is not one of `float`, `interval`, `leftright`.
    #[error("{0} is not a correct mode")]
    UnsupportedMode(String),

    /// The iteration cap is below the minimum of 2.
    #[error("max_iter must be at least 2 (got {0})")]
    MaxIterTooSmall(usize),

    /// The relative tolerance is not a positive finite number.
    #[error("eps must be positive and finite (got {0})")]
    EpsilonNotPositive(f64),

    /// Matrix and vector sizes disagree.
    #[error("dimension mismatch: expected {expected} entries, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
