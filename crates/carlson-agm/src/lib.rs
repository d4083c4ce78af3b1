//! Carlson's AGM iteration for the natural logarithm.
//!
//! Implements the base method from:
//! "An algorithm for computing logarithms and arctangents"
//! by B. C. Carlson (1972), Mathematics of Computation 26(118), 543-549.
//!
//! Two interleaved sequences, one averaging arithmetically and one
//! geometrically, are driven toward their common limit; the ratio
//! `(x - 1) / aₙ` then approaches `ln(x)`:
//!
//! - a₀ = (1 + x)/2, g₀ = √x
//! - a_{i+1} = (a_i + g_i)/2, g_{i+1} = √(a_{i+1}·g_i)
//!
//! The method accepts any positive `x`, not only inputs near 1,
//! though more steps are needed as |ln x| grows.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod agm;
pub mod elementwise;
pub mod error;

pub use agm::{approx_ln, approx_ln_sequence, AgmState};
pub use elementwise::{approx_ln_slice, par_approx_ln_slice};
pub use error::DomainError;
