//! Error-free transformations
//!
//! Each primitive returns a [`Pair`] whose exact sum `hi + lo` equals the
//! exact mathematical result of an elementary binary64 operation, with no
//! information loss: `hi` is the correctly-rounded result and `lo` is the
//! exact residual (not itself rounded away). The only precondition is that
//! the rounded result does not overflow.

use crate::pair::Pair;

/// 2Sum (Knuth/Møller): `hi = RN(a + b)` and `hi + lo == a + b` exactly,
/// for any finite `a`, `b`. Six floating-point operations, branch free,
/// no FMA required.
#[inline]
pub fn two_sum(a: f64, b: f64) -> Pair {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    Pair::new(s, e)
}

/// Fast2Sum (Dekker): same contract as [`two_sum`] at half the cost, but the
/// caller must guarantee `|a| >= |b|` (or `a == 0`). The precondition is a
/// caller obligation - violating it silently yields a non-exact residual.
/// Debug builds assert it.
#[inline]
pub fn fast_two_sum(a: f64, b: f64) -> Pair {
    debug_assert!(
        a == 0.0 || b == 0.0 || !(a.is_finite() && b.is_finite()) || a.abs() >= b.abs(),
        "fast_two_sum requires |a| >= |b|: a={a:e} b={b:e}"
    );
    quick_sum(a, b)
}

/// Fast2Sum body without the precondition assert, for composed algorithms
/// whose intermediate ordering is established analytically.
#[inline]
pub(crate) fn quick_sum(a: f64, b: f64) -> Pair {
    let s = a + b;
    let e = b - (s - a);
    Pair::new(s, e)
}

/// 2Prod: `hi = RN(a * b)` and `hi + lo == a * b` exactly, via one fused
/// multiply-add. Two floating-point operations.
#[inline]
pub fn two_prod(a: f64, b: f64) -> Pair {
    let p = a * b;
    let e = a.mul_add(b, -p);
    Pair::new(p, e)
}
