//! The arithmetic-geometric-mean recurrence and the base approximation.

use crate::error::DomainError;

/// The current arithmetic/geometric mean pair of the recurrence.
///
/// For every valid seed the pair satisfies `a ≥ g ≥ 0` (the seeds are
/// the arithmetic and geometric means of `1` and `x`, and each step
/// preserves the ordering), and the two values close in on a common
/// limit as the recurrence advances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgmState {
    a: f64,
    g: f64,
}

impl AgmState {
    /// Seeds the recurrence with `a₀ = (1 + x)/2` and `g₀ = √x`.
    ///
    /// Fails with [`DomainError::NonPositive`] unless `x > 0`.
    pub fn seed(x: f64) -> Result<Self, DomainError> {
        if x > 0.0 {
            Ok(Self {
                a: (1.0 + x) / 2.0,
                g: x.sqrt(),
            })
        } else {
            Err(DomainError::NonPositive { x })
        }
    }

    /// Advances the pair by one step.
    ///
    /// The new geometric mean pairs the freshly averaged arithmetic
    /// mean with the *previous* geometric mean, not the superseded
    /// pair; this asymmetry is what gives the method its convergence
    /// rate.
    pub fn step(&mut self) {
        self.a = (self.a + self.g) / 2.0;
        self.g = (self.a * self.g).sqrt();
    }

    /// The current arithmetic mean.
    pub fn arithmetic(&self) -> f64 {
        self.a
    }

    /// The current geometric mean.
    pub fn geometric(&self) -> f64 {
        self.g
    }
}

/// Approximates `ln(x)` with `n + 1` steps of the AGM recurrence.
///
/// Returns `(x - 1) / aₙ` where `aₙ` is the arithmetic mean after the
/// last completed step. The recurrence runs `n + 1` times for a
/// requested `n`, matching the counting under which the method's
/// error shrinks by a factor of 4 per level.
///
/// # Errors
///
/// [`DomainError::NonPositive`] if `x ≤ 0` or `x` is NaN.
///
/// # Example
///
/// ```
/// let ln2 = carlson_agm::approx_ln(2.0, 7).unwrap();
/// assert!((ln2 - 2.0_f64.ln()).abs() < 1e-6);
/// ```
pub fn approx_ln(x: f64, n: usize) -> Result<f64, DomainError> {
    let mut state = AgmState::seed(x)?;
    for _ in 0..=n {
        state.step();
    }
    Ok((x - 1.0) / state.arithmetic())
}

/// Returns the estimate after every completed step `0..=n`.
///
/// Element `i` equals `approx_ln(x, i)`; the whole family costs a
/// single pass over the recurrence instead of `n + 1` restarts.
pub fn approx_ln_sequence(x: f64, n: usize) -> Result<Vec<f64>, DomainError> {
    let mut state = AgmState::seed(x)?;
    let mut estimates = Vec::with_capacity(n + 1);
    for _ in 0..=n {
        state.step();
        estimates.push((x - 1.0) / state.arithmetic());
    }
    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ln_of_one_is_exactly_zero() {
        for n in [0, 1, 5, 15] {
            assert_eq!(approx_ln(1.0, n).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_ln_two_with_seven_steps() {
        let value = approx_ln(2.0, 7).unwrap();
        assert!((value - std::f64::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_inputs_are_rejected() {
        assert_eq!(
            approx_ln(0.0, 3),
            Err(DomainError::NonPositive { x: 0.0 })
        );
        assert_eq!(
            approx_ln(-5.0, 3),
            Err(DomainError::NonPositive { x: -5.0 })
        );
        assert!(approx_ln(f64::NAN, 3).is_err());
    }

    #[test]
    fn test_n_zero_performs_one_step() {
        let x = 2.0;
        let mut state = AgmState::seed(x).unwrap();
        state.step();
        assert_eq!(approx_ln(x, 0).unwrap(), (x - 1.0) / state.arithmetic());
    }

    #[test]
    fn test_error_is_non_increasing_in_n() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut inputs: Vec<f64> = vec![0.05, 0.5, 1.41, 2.0, 20.0, 50.0];
        inputs.extend((0..50).map(|_| rng.gen_range(0.05..50.0)));

        for x in inputs {
            let truth = x.ln();
            let estimates = approx_ln_sequence(x, 15).unwrap();
            for pair in estimates.windows(2) {
                let before = (pair[0] - truth).abs();
                let after = (pair[1] - truth).abs();
                assert!(
                    after <= before + 1e-12,
                    "error grew from {before} to {after} for x = {x}"
                );
            }
        }
    }

    #[test]
    fn test_converges_far_from_one() {
        for x in [0.05, 50.0] {
            let value = approx_ln(x, 15).unwrap();
            assert!((value - x.ln()).abs() < 1e-8, "x = {x}");
        }
    }

    #[test]
    fn test_sequence_matches_scalar_calls() {
        let x = 1.41;
        let estimates = approx_ln_sequence(x, 10).unwrap();
        assert_eq!(estimates.len(), 11);
        for (i, &estimate) in estimates.iter().enumerate() {
            assert_eq!(estimate, approx_ln(x, i).unwrap());
        }
    }

    #[test]
    fn test_arithmetic_mean_stays_above_geometric() {
        for x in [0.05, 0.3, 0.9, 1.0, 3.0, 50.0] {
            let mut state = AgmState::seed(x).unwrap();
            for _ in 0..10 {
                state.step();
                assert!(state.arithmetic() >= state.geometric(), "x = {x}");
                assert!(state.geometric() >= 0.0, "x = {x}");
            }
        }
    }
}
