//! Richardson-accelerated Carlson logarithm.
//!
//! The base AGM iteration gains roughly a fixed factor of accuracy
//! per step. Keeping every intermediate arithmetic mean instead of
//! only the last one allows a triangular extrapolation pass across
//! iteration levels: each level combines two adjacent estimates with
//! weights chosen to cancel the leading error term, since the base
//! error decays by 4⁻ᵏ per extrapolation order.
//!
//! For the same step count `n`, the refined corner estimate `d(n, n)`
//! converges to `ln(x)` at a strictly higher effective order than the
//! raw `aₙ`, at the cost of `O(n²)` storage and arithmetic instead of
//! `O(n)`.

pub mod accel;
pub mod elementwise;
pub mod table;

pub use accel::{fast_approx_ln, fast_approx_ln_sequence};
pub use elementwise::{fast_approx_ln_slice, par_fast_approx_ln_slice};
pub use table::ExtrapolationTable;
