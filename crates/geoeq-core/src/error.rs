//! Error conditions raised by the equation engine.
//!
//! All conditions are terminal for the current construction run: the
//! stores keep whatever was emitted before the failure and the caller is
//! expected to discard the session.

use thiserror::Error;

/// Errors that can occur while building a construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    /// A literal value was built without an integer sample.
    #[error("value without an unknown must have an integer sample")]
    MalformedValue,

    /// Exponentiation with an exponent that is neither a literal integer
    /// nor a rational literal.
    #[error("unsupported power {0}: only literal integer and rational exponents are supported")]
    UnsupportedPower(String),

    /// An integer sample was required but the value only has a symbolic one.
    #[error("integer sample not found in {0}")]
    MissingSample(String),

    /// `is_zero` on a value whose integer sample is non-zero.
    #[error("cannot assert that {value} is zero: its sample is {sample}")]
    InconsistentConstant {
        /// Display form of the value.
        value: String,
        /// The non-zero sample.
        sample: String,
    },

    /// `is_constant` on an unknown whose sample is unresolved.
    #[error("cannot bind {0} to a constant: it has no sample")]
    UnknownWithoutSample(String),

    /// `distance` or `distance_sqr` between two lines.
    #[error("distance between two lines is undefined")]
    UndefinedPairing,

    /// Division by the literal zero, or a rational literal with a zero
    /// denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// Division by an unknown whose integer sample is exactly zero.
    #[error("degenerate construction: divisor {0} has a zero sample")]
    DegenerateConstruction(String),

    /// An assertion whose float witness is not numerically zero.
    #[error("assertion on {value} is violated by its witness {witness}")]
    WitnessViolation {
        /// Display form of the asserted expression.
        value: String,
        /// The offending float witness.
        witness: f64,
    },
}

/// Result type used throughout the engine crates.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
