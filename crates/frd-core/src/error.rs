//! Error types for frequency response models

use thiserror::Error;

/// Errors raised by model construction, conversion, and composition.
#[derive(Error, Debug)]
pub enum FrdError {
    /// Malformed constructor input, e.g. a frequency grid that is empty,
    /// contains non-finite or negative values, or is not strictly
    /// increasing.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Response tensor and frequency grid disagree on the sample count.
    #[error("response tensor holds {found} frequency sample(s) but the grid has {expected}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Input/output counts of two operands are incompatible.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The requested operation only exists for single-input single-output
    /// models.
    #[error("{0} is only implemented for SISO models")]
    NotImplemented(&'static str),

    /// Exponentiation with a non-integer exponent.
    #[error("exponent must be an integer, got {0}")]
    InvalidExponent(f64),

    /// Frequency ranges of two models share no common interval.
    #[error("frequency ranges do not overlap")]
    NoOverlap,

    /// The operand cannot be coerced to a frequency response model.
    #[error("cannot convert {0} to a frequency response model")]
    UnsupportedConversion(String),

    /// The closed-loop matrix was singular at a frequency sample.
    #[error("singular closed-loop matrix at {omega} rad/s")]
    SingularMatrix { omega: f64 },
}
