//! Algebraic functions: square, inverse, square root, reciprocal square root,
//! integer powers
//!
//! Everything here is Newton-style refinement over a native binary64 seed.
//! The named variants of one function are points on the same algorithmic
//! family - they differ only in seed method and refinement count, each with
//! a separately tracked empirical worst-case error (see `bin/accuracy`), not
//! independent designs.
//!
//! Domain edges are a non-goal: `sqrt` of a negative value, inverse of zero
//! and similar inputs follow native binary64 semantics (NaN/infinity
//! propagation) without special validation.

use crate::arith::mul;
use crate::eft::{quick_sum, two_prod};
use crate::pair::Pair;

/// Square of a pair. Specializes `mul(a, a)`: the doubled cross term
/// `2·hi·lo` is computed once.
#[inline]
pub fn sq(a: Pair) -> Pair {
    let p = two_prod(a.hi, a.hi);
    let e = (2.0 * a.hi).mul_add(a.lo, p.lo);
    quick_sum(p.hi, e)
}

// ---------------------------------------------------------------------------
// inverse: x_{n+1} = x_n·(2 - a·x_n), seeded from the native reciprocal
// ---------------------------------------------------------------------------

#[inline]
fn inv_correction(a: Pair, x0: f64) -> f64 {
    // t = 1 - a*x0, both limbs folded through FMA
    let t = (-a.hi).mul_add(x0, 1.0);
    (-a.lo).mul_add(x0, t)
}

/// Inverse of a pair: seeded Newton step, renormalized.
#[inline]
pub fn inv(a: Pair) -> Pair {
    let x0 = a.hi.recip();
    let t = inv_correction(a, x0);
    quick_sum(x0, x0 * t)
}

/// Relaxed inverse: as [`inv`] without the final renormalization.
#[inline]
pub fn inv_q(a: Pair) -> Pair {
    let x0 = a.hi.recip();
    let t = inv_correction(a, x0);
    Pair::new(x0, x0 * t)
}

/// Fully-converged inverse: one refinement pass beyond [`inv`], at
/// proportional cost.
#[inline]
pub fn inv_a(a: Pair) -> Pair {
    let x = inv(a);
    let w = mul(a, x);
    // w is within a few ulp of one, so the subtraction is exact
    let e = (1.0 - w.hi) - w.lo;
    quick_sum(x.hi, x.lo + x.hi * e)
}

/// Inverse of a double, division-refined residual.
#[inline]
pub fn inv_d(x: f64) -> Pair {
    let q0 = x.recip();
    let e = (-q0).mul_add(x, 1.0);
    quick_sum(q0, e / x)
}

/// Inverse of a double, Newton-refined residual (multiply instead of divide).
#[inline]
pub fn inv_dn(x: f64) -> Pair {
    let q0 = x.recip();
    let e = (-q0).mul_add(x, 1.0);
    quick_sum(q0, q0 * e)
}

/// Inverse of a double, second-order Newton residual `q0·(e + e²)`.
#[inline]
pub fn inv_dh(x: f64) -> Pair {
    let q0 = x.recip();
    let e = (-q0).mul_add(x, 1.0);
    quick_sum(q0, q0 * e.mul_add(e, e))
}

// ---------------------------------------------------------------------------
// square root / reciprocal square root
// ---------------------------------------------------------------------------

/// Square root of a pair; requires `a.hi > 0` (negative input propagates the
/// native NaN). Native seed plus one compensated-residual correction.
#[inline]
pub fn sqrt(a: Pair) -> Pair {
    let s0 = a.hi.sqrt();
    let p = two_prod(s0, s0);
    let e = ((a.hi - p.hi) - p.lo) + a.lo;
    quick_sum(s0, e / (2.0 * s0))
}

/// Relaxed square root of a double: exact FMA residual, no renormalization.
#[inline]
pub fn sqrt_d_q(x: f64) -> Pair {
    let s0 = x.sqrt();
    let e = (-s0).mul_add(s0, x);
    Pair::new(s0, e / (2.0 * s0))
}

#[inline]
fn rsqrt_residual(x: f64, y0: f64) -> f64 {
    // 1 - x*y0^2 with the square kept exact
    let t = two_prod(y0, y0);
    (-x).mul_add(t.hi, 1.0) - x * t.lo
}

/// Reciprocal square root of a double: inverse-then-sqrt seed, one Newton
/// correction `y0·e/2` from `y_{n+1} = y_n·(3 - x·y_n²)/2`.
#[inline]
pub fn rsqrt_d(x: f64) -> Pair {
    let y0 = x.sqrt().recip();
    let e = rsqrt_residual(x, y0);
    quick_sum(y0, y0 * (0.5 * e))
}

/// Reciprocal square root of a double, second-order correction
/// `y0·(e/2 + 3e²/8)`.
#[inline]
pub fn rsqrt_dh(x: f64) -> Pair {
    let y0 = x.sqrt().recip();
    let e = rsqrt_residual(x, y0);
    quick_sum(y0, y0 * (0.5 * e + 0.375 * (e * e)))
}

// ---------------------------------------------------------------------------
// integer exponentiation
// ---------------------------------------------------------------------------

/// `x^n` by binary exponentiation with pair multiplies; `powi(x, 0)` is
/// one. Error compounds roughly with `log2(n)` pair roundings; not
/// correctly rounded.
pub fn powi(x: Pair, n: u32) -> Pair {
    if n == 0 {
        return Pair::ONE;
    }
    let mut b = x;
    let mut m = n;
    while m & 1 == 0 {
        b = sq(b);
        m >>= 1;
    }
    let mut r = b;
    m >>= 1;
    while m > 0 {
        b = sq(b);
        if m & 1 == 1 {
            r = mul(r, b);
        }
        m >>= 1;
    }
    r
}
