//! Round-to-odd and the correctly-rounded three-term sums
//!
//! Round-to-odd forces the result's last significand bit to one whenever
//! information was discarded, which makes a later round-to-nearest step
//! double-rounding safe. That makes it the right *intermediate* rounding for
//! multi-term sums whose final result must be correctly rounded once.
//!
//! The numeric constants and branch predicates here are part of the
//! algorithms' correctness proofs and must not be re-derived or tuned.

use crate::eft::two_sum;
use crate::pair::Pair;

/// Round an exact pair (for example [`two_sum`] output) to a single double
/// under round-to-odd: if `lo != 0` and `hi`'s last significand bit is even,
/// nudge the bit pattern by one unit toward the discarded residual.
///
/// Boldo & Melquiond (2008).
#[inline]
pub fn round_odd(v: Pair) -> f64 {
    let r = v.hi.to_bits();
    // an exact pair with hi == ±0 has lo == 0, so the nudge cannot wrap
    if (r & 1) == 0 && v.lo != 0.0 {
        if (v.hi > 0.0) != (v.lo < 0.0) {
            f64::from_bits(r.wrapping_add(1))
        } else {
            f64::from_bits(r.wrapping_sub(1))
        }
    } else {
        v.hi
    }
}

/// Sum of two doubles rounded to odd.
#[inline]
pub fn add_ro(x: f64, y: f64) -> f64 {
    round_odd(two_sum(x, y))
}

/// Three-term sum via a round-to-odd intermediate; equals the exact sum
/// `a + b + c` rounded once to nearest, for all finite inputs whose sum does
/// not overflow. Boldo & Melquiond (2008).
#[inline]
pub fn add3_odd(a: f64, b: f64, c: f64) -> f64 {
    let x = two_sum(a, b);
    let s = two_sum(c, x.hi);
    let v = add_ro(x.lo, s.lo);
    s.hi + v
}

/// True unless `x` is exactly 1 or 3 times a power of two - the residual
/// shapes for which the final addition of [`add3_parity`] could double-round.
/// `P`/`Q` are fixed by the proof: 2^51 + 1 and 2^51.
#[inline]
pub(crate) fn not_1or3_times_pot(x: f64) -> bool {
    const P: f64 = 2251799813685249.0;
    const Q: f64 = 2251799813685248.0;
    let delta = (P * x) - (Q * x);
    delta != x
}

/// Three-term sum via a parity classification of the residual instead of a
/// bit-pattern nudge; same contract as [`add3_odd`]. The correction factors
/// 0.875 and 1.125 are fixed by the proof. Graillat & Muller (2025).
#[inline]
pub fn add3_parity(a: f64, b: f64, c: f64) -> f64 {
    let x = two_sum(a, b);
    let s = two_sum(x.hi, c);
    let v = two_sum(x.lo, s.lo);

    if not_1or3_times_pot(v.hi) || v.lo == 0.0 {
        return s.hi + v.hi;
    }

    if (v.lo < 0.0) != (v.hi < 0.0) {
        s.hi + 0.875 * v.hi
    } else {
        s.hi + 1.125 * v.hi
    }
}
