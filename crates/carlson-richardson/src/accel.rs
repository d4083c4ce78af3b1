//! The accelerated approximation.

use carlson_agm::{AgmState, DomainError};

use crate::table::ExtrapolationTable;

/// Approximates `ln(x)` by extrapolating over `n + 1` AGM steps.
///
/// Runs the same recurrence as [`carlson_agm::approx_ln`], records
/// every intermediate arithmetic mean in a triangular table, and
/// returns `(x - 1) / d(n, n)` where `d(n, n)` is the table's
/// most-refined corner entry. For `n = 0` the table holds the single
/// entry `a₀` and the result is identical to the base method's.
///
/// Accuracy is at least the base method's for the same inputs, and
/// asymptotically much better, until floating-point cancellation in
/// the elimination steps takes over at double-digit `n`; past that
/// point the error no longer shrinks monotonically.
///
/// # Errors
///
/// [`DomainError::NonPositive`] if `x ≤ 0` or `x` is NaN.
///
/// # Example
///
/// ```
/// let ln2 = carlson_richardson::fast_approx_ln(2.0, 5).unwrap();
/// assert!((ln2 - 2.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn fast_approx_ln(x: f64, n: usize) -> Result<f64, DomainError> {
    let table = extrapolate(x, n)?;
    Ok((x - 1.0) / table.entry(n, n))
}

/// Returns the accelerated estimate for every level `0..=n`.
///
/// Element `i` equals `fast_approx_ln(x, i)`: row `i` of the table
/// depends only on rows below it, so one table's diagonal yields the
/// whole family.
pub fn fast_approx_ln_sequence(x: f64, n: usize) -> Result<Vec<f64>, DomainError> {
    let table = extrapolate(x, n)?;
    Ok(table.diagonal().map(|d| (x - 1.0) / d).collect())
}

/// Drives the recurrence and fills one table row per step.
fn extrapolate(x: f64, n: usize) -> Result<ExtrapolationTable, DomainError> {
    let mut state = AgmState::seed(x)?;
    let mut table = ExtrapolationTable::with_capacity(n + 1);
    for _ in 0..=n {
        state.step();
        table.push_row(state.arithmetic());
    }
    Ok(table)
}
