//! Arbitrary-precision reference oracle and ULP-distance metric
//!
//! The accuracy harness compares every operation against `dashu`'s binary
//! big-float evaluated at 256 bits. Binary base matters: pair and double
//! inputs embed exactly, so sums of sampled inputs are exact and the derived
//! operations are accurate to far below the 2^-106 resolution being measured.
//!
//! Distances are reported in units of 2^-106 relative to the true result's
//! magnitude - the unit in the last place of a pair's low limb at the
//! result's exponent.

use dashu_base::{Abs, SquareRoot};
use dashu_float::round::mode::HalfEven;
use dashu_float::round::Rounding;
use dashu_float::FBig;

use crate::pair::Pair;

/// Binary big float, round-to-nearest-even.
pub type Real = FBig<HalfEven, 2>;

/// Working precision in bits. Wide enough that sums of 53-bit inputs with
/// the sampled exponent spread stay exact.
pub const PRECISION: usize = 256;

fn val<T>(a: dashu_base::Approximation<T, Rounding>) -> T {
    match a {
        dashu_base::Approximation::Exact(v) => v,
        dashu_base::Approximation::Inexact(v, _) => v,
    }
}

/// Embed a finite double exactly at working precision.
pub fn real_of(x: f64) -> Real {
    let r = Real::try_from(x).expect("oracle input must be finite");
    val(r.with_precision(PRECISION))
}

/// Embed a pair exactly: the limbs are added at working precision.
pub fn to_real(p: Pair) -> Real {
    real_of(p.hi) + real_of(p.lo)
}

/// Round a real to the nearest pair: `hi` is the nearest double, `lo` the
/// nearest double to the remainder. For any normalized pair this inverts
/// [`to_real`] bit-exactly.
pub fn to_pair(r: &Real) -> Pair {
    let hi = val(r.to_f64());
    let lo = val((r.clone() - real_of(hi)).to_f64());
    Pair::new(hi, lo)
}

/// Round a real to the nearest `f32`. Used to check double-rounding safety
/// of round-to-odd intermediates.
pub fn to_f32(r: &Real) -> f32 {
    val(r.to_f32())
}

/// `2^k` without intermediate overflow for `|k|` up to ~2000.
fn pow2(k: i32) -> f64 {
    let h = k / 2;
    2f64.powi(h) * 2f64.powi(k - h)
}

/// Distance between the true result and a candidate pair, in units of
/// 2^-106 at the true result's exponent (the `53 + 54 - exp` scaling).
/// Assumes the true result is finite; zero only matches an exactly-zero
/// candidate.
pub fn ulp_dist(truth: &Real, r: Pair) -> f64 {
    let t = val(truth.to_f64());
    if t == 0.0 {
        let c = val(to_real(r).to_f64());
        return if c == 0.0 { 0.0 } else { f64::INFINITY };
    }
    // exponent with the significand in [0.5, 1), taken from the true value:
    // t can round up into the next binade when the truth sits just below a
    // power of two
    let mut rexp = t.abs().log2().floor() as i32 + 1;
    if truth.clone().abs() < real_of(pow2(rexp - 1)) {
        rexp -= 1;
    }
    let diff = val((truth.clone() - to_real(r)).abs().to_f64());
    diff * pow2(53 + 54 - rexp)
}

// ---------------------------------------------------------------------------
// reference operations, one per dispatch-table entry
// ---------------------------------------------------------------------------

pub fn add(a: &Real, b: &Real) -> Real {
    a.clone() + b.clone()
}

pub fn sub(a: &Real, b: &Real) -> Real {
    a.clone() - b.clone()
}

pub fn mul(a: &Real, b: &Real) -> Real {
    a.clone() * b.clone()
}

pub fn div(a: &Real, b: &Real) -> Real {
    a.clone() / b.clone()
}

pub fn sqr(a: &Real) -> Real {
    a.clone() * a.clone()
}

pub fn sqrt(a: &Real) -> Real {
    a.clone().sqrt()
}

pub fn inv(a: &Real) -> Real {
    real_of(1.0) / a.clone()
}

pub fn rec_sqrt(a: &Real) -> Real {
    inv(&sqrt(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const P60: f64 = f64::from_bits(0x3c30000000000000); // 2^-60

    #[test]
    fn pair_embedding_round_trips() {
        let p = Pair::new(1.0, P60);
        assert_eq!(to_pair(&to_real(p)).to_bits(), p.to_bits());
    }

    #[test]
    fn exact_results_have_zero_distance() {
        let p = Pair::new(1.0, P60);
        let truth = add(&real_of(1.0), &real_of(P60));
        assert_eq!(ulp_dist(&truth, p), 0.0);
    }

    #[test]
    fn distance_uses_the_true_results_binade() {
        // truth = 2 - 2^-107 rounds up to 2.0, one binade above itself;
        // the unit must still come from the binade below
        let p107 = f64::from_bits(0x3940000000000000); // 2^-107
        let truth = sub(&real_of(2.0), &real_of(p107));
        let d = ulp_dist(&truth, Pair::new(2.0, 0.0));
        assert_eq!(d, 0.5);
    }

    #[test]
    fn low_limb_flip_is_one_unit() {
        // perturbing the last bit of the low limb moves by one 2^-106 unit
        let p = Pair::new(1.5, P60);
        let truth = to_real(p);
        let off = Pair::new(1.5, f64::from_bits(P60.to_bits() ^ 1));
        let d = ulp_dist(&truth, off);
        assert!(d > 0.0 && d < 1.0, "d = {d}");
    }
}
