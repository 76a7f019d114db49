//! # f64pair: double-double extended precision arithmetic
//!
//! Unevaluated-sum pairs of `f64` giving roughly 106 bits of significand,
//! built from error-free transformations (2Sum, Fast2Sum, FMA-based 2Prod).
//! Each arithmetic operation comes in accuracy/cost variants, and a sampling
//! harness measures every variant against a 256-bit reference.

pub mod arith;
pub mod eft;
pub mod funcs;
pub mod oracle; // Arbitrary-precision reference and ulp distance
pub mod pair;
pub mod regression; // Historic worst-case dataset
pub mod report;
pub mod roundodd; // Round-to-odd and exact three-term sums
pub mod table; // Dispatch tables for the accuracy harness
pub mod test_utils;

// Re-export the core surface
pub use eft::{fast_two_sum, two_prod, two_sum};
pub use pair::{Pair, ParsePairError, ulp};
pub use roundodd::{add3_odd, add3_parity, add_ro, round_odd};
