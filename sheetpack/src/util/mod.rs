/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;

/// Rounds `value` to two decimals, the precision in which efficiencies are reported.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
