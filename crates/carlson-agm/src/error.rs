//! Error type shared by the logarithm approximations.

use thiserror::Error;

/// Failure raised when an input lies outside the domain of `ln`.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DomainError {
    /// The input was zero, negative, or NaN; `ln(x)` and the initial
    /// geometric mean `√x` are undefined there.
    #[error("ln is undefined for non-positive input {x}")]
    NonPositive {
        /// The offending input value.
        x: f64,
    },
}
