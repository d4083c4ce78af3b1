//! Elementwise application over slices of inputs.
//!
//! The scalar function stays the single source of truth; these
//! wrappers map it over a sequence and collect the results in input
//! order. Each element is fully independent, so the parallel variants
//! split the work freely across threads.

use rayon::prelude::*;

use crate::agm::approx_ln;
use crate::error::DomainError;

/// Minimum slice length before the parallel mappers fan out.
const PARALLEL_THRESHOLD: usize = 64;

/// Applies [`approx_ln`] to every element of `xs` with a shared `n`.
///
/// The first non-positive element aborts the whole call, with that
/// element's value in the error.
pub fn approx_ln_slice(xs: &[f64], n: usize) -> Result<Vec<f64>, DomainError> {
    xs.iter().map(|&x| approx_ln(x, n)).collect()
}

/// Parallel version of [`approx_ln_slice`].
///
/// Falls back to the sequential path for slices shorter than the
/// split threshold.
pub fn par_approx_ln_slice(xs: &[f64], n: usize) -> Result<Vec<f64>, DomainError> {
    if xs.len() < PARALLEL_THRESHOLD {
        return approx_ln_slice(xs, n);
    }
    xs.par_iter().map(|&x| approx_ln(x, n)).collect()
}
