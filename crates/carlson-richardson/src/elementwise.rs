//! Elementwise application over slices of inputs.
//!
//! Mirrors the wrappers in `carlson_agm::elementwise` for the
//! accelerated method: the scalar function is the single source of
//! truth, results come back in input order, and the parallel variant
//! splits across threads only once the slice is long enough to pay
//! for it.

use rayon::prelude::*;

use carlson_agm::DomainError;

use crate::accel::fast_approx_ln;

/// Minimum slice length before the parallel mapper fans out.
const PARALLEL_THRESHOLD: usize = 64;

/// Applies [`fast_approx_ln`] to every element of `xs` with a shared
/// `n`.
///
/// The first non-positive element aborts the whole call, with that
/// element's value in the error.
pub fn fast_approx_ln_slice(xs: &[f64], n: usize) -> Result<Vec<f64>, DomainError> {
    xs.iter().map(|&x| fast_approx_ln(x, n)).collect()
}

/// Parallel version of [`fast_approx_ln_slice`].
pub fn par_fast_approx_ln_slice(xs: &[f64], n: usize) -> Result<Vec<f64>, DomainError> {
    if xs.len() < PARALLEL_THRESHOLD {
        return fast_approx_ln_slice(xs, n);
    }
    xs.par_iter().map(|&x| fast_approx_ln(x, n)).collect()
}
