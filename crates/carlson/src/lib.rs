//! # Carlson
//!
//! Numeric approximation of the natural logarithm via Carlson's
//! arithmetic-geometric-mean iteration, with a Richardson-extrapolated
//! fast variant.
//!
//! ## Features
//!
//! - **Base method**: `n + 1` AGM steps, `(x - 1)/aₙ → ln(x)`
//! - **Accelerated method**: triangular extrapolation over the
//!   intermediate means, much tighter for the same step count
//! - **Elementwise mapping**: sequential and rayon-parallel slice
//!   wrappers around the scalar functions
//! - **Checked domain**: non-positive inputs fail with a typed error
//!   instead of producing NaN
//!
//! ## Quick Start
//!
//! ```
//! use carlson::prelude::*;
//!
//! let truth = 2.0_f64.ln();
//! let base = approx_ln(2.0, 7).unwrap();
//! let fast = fast_approx_ln(2.0, 7).unwrap();
//! assert!((base - truth).abs() < 1e-6);
//! assert!((fast - truth).abs() <= (base - truth).abs());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use carlson_agm as agm;
pub use carlson_richardson as richardson;

pub use carlson_agm::{
    approx_ln, approx_ln_sequence, approx_ln_slice, par_approx_ln_slice, DomainError,
};
pub use carlson_richardson::{
    fast_approx_ln, fast_approx_ln_sequence, fast_approx_ln_slice, par_fast_approx_ln_slice,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use carlson_agm::{
        approx_ln, approx_ln_slice, par_approx_ln_slice, AgmState, DomainError,
    };
    pub use carlson_richardson::{
        fast_approx_ln, fast_approx_ln_slice, par_fast_approx_ln_slice, ExtrapolationTable,
    };
}
