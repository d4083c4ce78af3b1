//! Prints how fast both approximations close in on ln(x).
//!
//! For a fixed input, lists the absolute error of the base AGM
//! iteration and the accelerated method against the standard
//! library's `ln` for each step count.

use carlson::{approx_ln_sequence, fast_approx_ln_sequence};

fn main() {
    let x = 1.41_f64;
    let n = 7;
    let truth = x.ln();

    let base = approx_ln_sequence(x, n).expect("input is positive");
    let fast = fast_approx_ln_sequence(x, n).expect("input is positive");

    println!("x = {x}, ln(x) = {truth:.15}");
    println!("{:>3}  {:>12}  {:>12}", "n", "base err", "accel err");
    for i in 0..=n {
        println!(
            "{:3}  {:12.3e}  {:12.3e}",
            i,
            (base[i] - truth).abs(),
            (fast[i] - truth).abs()
        );
    }
}
