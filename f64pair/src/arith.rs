//! Basic pair arithmetic: add, subtract, multiply, divide
//!
//! The default functions accept and return fully-normalized pairs. Each has
//! companions following the crate-wide suffix convention:
//!
//! * `_q` - "quick" relaxed variant: skips the final renormalization, so the
//!   result's low limb may overlap the high limb. A documented, typically
//!   sub-2-ulp accuracy cost buys a shorter operation count.
//! * `_s` - "short" normalized variant: a single correction pass instead of
//!   two. Still renormalized, looser bound under cancellation.
//! * `_a` - "accurate" variant: one extra refinement pass.
//!
//! Error bounds quoted below are empirical worst-observed values from the
//! oracle harness (`bin/accuracy`), in units of 2^-106 relative to the true
//! result, not formal proofs. The operators make no assumption about the
//! operands' relative magnitude; catastrophic cancellation yields a
//! correctly-signed result (including exact zero), never a spurious NaN.
//! Non-finite inputs propagate native binary64 semantics.
//!
//! Mixed scalar/pair shapes (`_dp`, `_pd`, `_dd` suffixes, operand order in
//! the name) are specializations with one low limb known zero, provided to
//! avoid redundant work; their contracts match the general pair forms.

use crate::eft::{quick_sum, two_prod, two_sum};
use crate::pair::Pair;

// ---------------------------------------------------------------------------
// addition / subtraction
// ---------------------------------------------------------------------------

/// Pair addition, two correction passes (Joldès–Muller–Popescu AccurateDWPlusDW).
/// Empirical bound ~6 units.
#[inline]
pub fn add(a: Pair, b: Pair) -> Pair {
    let s = two_sum(a.hi, b.hi);
    let t = two_sum(a.lo, b.lo);
    let c = s.lo + t.hi;
    let v = quick_sum(s.hi, c);
    let w = t.lo + v.lo;
    quick_sum(v.hi, w)
}

/// Pair addition, single correction pass. Cheaper than [`add`]; the bound
/// degrades when the high limbs cancel.
#[inline]
pub fn add_s(a: Pair, b: Pair) -> Pair {
    let s = two_sum(a.hi, b.hi);
    let e = s.lo + (a.lo + b.lo);
    quick_sum(s.hi, e)
}

/// Relaxed pair addition: [`add_s`] without the final renormalization.
#[inline]
pub fn add_q(a: Pair, b: Pair) -> Pair {
    let s = two_sum(a.hi, b.hi);
    Pair::new(s.hi, s.lo + (a.lo + b.lo))
}

/// Pair subtraction by negate-and-add; contract of [`add`].
#[inline]
pub fn sub(a: Pair, b: Pair) -> Pair {
    add(a, -b)
}

/// Single-pass subtraction; contract of [`add_s`].
#[inline]
pub fn sub_s(a: Pair, b: Pair) -> Pair {
    add_s(a, -b)
}

/// Relaxed subtraction; contract of [`add_q`].
#[inline]
pub fn sub_q(a: Pair, b: Pair) -> Pair {
    add_q(a, -b)
}

/// Ordered subtraction: branches on the leading-limb magnitudes so the exact
/// head merge can use Fast2Sum. Numerically distinct from [`sub`]; the two
/// are not interchangeable, though the bound is comparably small.
#[inline]
pub fn osub(a: Pair, b: Pair) -> Pair {
    let s = if a.hi.abs() >= b.hi.abs() {
        quick_sum(a.hi, -b.hi)
    } else {
        quick_sum(-b.hi, a.hi)
    };
    let t = two_sum(a.lo, -b.lo);
    let c = s.lo + t.hi;
    let v = quick_sum(s.hi, c);
    let w = t.lo + v.lo;
    quick_sum(v.hi, w)
}

/// Relaxed ordered subtraction.
#[inline]
pub fn osub_q(a: Pair, b: Pair) -> Pair {
    let s = if a.hi.abs() >= b.hi.abs() {
        quick_sum(a.hi, -b.hi)
    } else {
        quick_sum(-b.hi, a.hi)
    };
    Pair::new(s.hi, s.lo + (a.lo - b.lo))
}

/// double + pair.
#[inline]
pub fn add_dp(a: f64, b: Pair) -> Pair {
    let s = two_sum(a, b.hi);
    quick_sum(s.hi, s.lo + b.lo)
}

/// pair + double.
#[inline]
pub fn add_pd(a: Pair, b: f64) -> Pair {
    add_dp(b, a)
}

// ---------------------------------------------------------------------------
// multiplication
// ---------------------------------------------------------------------------

/// Pair multiplication: exact head product, cross terms folded by compensated
/// summation into the trailing limb. Empirical bound ~10 units.
#[inline]
pub fn mul(a: Pair, b: Pair) -> Pair {
    let p = two_prod(a.hi, b.hi);
    let cross = a.hi.mul_add(b.lo, a.lo * b.hi);
    quick_sum(p.hi, p.lo + cross)
}

/// Relaxed pair multiplication: [`mul`] without the final renormalization.
#[inline]
pub fn mul_q(a: Pair, b: Pair) -> Pair {
    let p = two_prod(a.hi, b.hi);
    let cross = a.hi.mul_add(b.lo, a.lo * b.hi);
    Pair::new(p.hi, p.lo + cross)
}

/// pair × double.
#[inline]
pub fn mul_pd(a: Pair, b: f64) -> Pair {
    let p = two_prod(a.hi, b);
    let e = a.lo.mul_add(b, p.lo);
    quick_sum(p.hi, e)
}

/// Relaxed pair × double.
#[inline]
pub fn mul_pd_q(a: Pair, b: f64) -> Pair {
    let p = two_prod(a.hi, b);
    Pair::new(p.hi, a.lo.mul_add(b, p.lo))
}

/// double × pair.
#[inline]
pub fn mul_dp(a: f64, b: Pair) -> Pair {
    mul_pd(b, a)
}

// ---------------------------------------------------------------------------
// division
// ---------------------------------------------------------------------------
//
// All division forms are Newton–Raphson style: a native seed quotient, a
// compensated residual, and one or two corrections. Division by a zero-valued
// pair follows native binary64 semantics (infinity or NaN limbs), untrapped.

/// Pair division, one refinement pass.
#[inline]
pub fn div(a: Pair, b: Pair) -> Pair {
    let q0 = a.hi / b.hi;
    let r = sub(a, mul_pd(b, q0));
    let q1 = r.hi / b.hi;
    quick_sum(q0, q1)
}

/// Pair division, two refinement passes.
#[inline]
pub fn div_a(a: Pair, b: Pair) -> Pair {
    let q0 = a.hi / b.hi;
    let r = sub(a, mul_pd(b, q0));
    let q1 = r.hi / b.hi;
    let r2 = sub(r, mul_pd(b, q1));
    let q2 = r2.hi / b.hi;
    let t = quick_sum(q0, q1);
    quick_sum(t.hi, t.lo + q2)
}

/// Relaxed pair division: scalar residual fold, no renormalization.
#[inline]
pub fn div_q(a: Pair, b: Pair) -> Pair {
    let q0 = a.hi / b.hi;
    let p = two_prod(b.hi, q0);
    let e = ((a.hi - p.hi) - b.lo.mul_add(q0, p.lo) + a.lo) / b.hi;
    Pair::new(q0, e)
}

/// double / double to full pair precision. The FMA residual is exact, so the
/// result is the correctly-rounded quotient plus a one-rounding tail.
#[inline]
pub fn div_dd(a: f64, b: f64) -> Pair {
    let q0 = a / b;
    let e = (-q0).mul_add(b, a);
    quick_sum(q0, e / b)
}

/// Relaxed double / double.
#[inline]
pub fn div_dd_q(a: f64, b: f64) -> Pair {
    let q0 = a / b;
    let e = (-q0).mul_add(b, a);
    Pair::new(q0, e / b)
}

/// pair / double.
#[inline]
pub fn div_pd(a: Pair, b: f64) -> Pair {
    let q0 = a.hi / b;
    let p = two_prod(q0, b);
    // a.hi - p.hi is exact: p.hi is within one rounding of a.hi.
    let e = ((a.hi - p.hi) - p.lo + a.lo) / b;
    quick_sum(q0, e)
}

/// double / pair.
#[inline]
pub fn div_dp(a: f64, b: Pair) -> Pair {
    let q0 = a / b.hi;
    let t = mul_pd(b, q0);
    let s = two_sum(a, -t.hi);
    let r = s.hi + (s.lo - t.lo);
    quick_sum(q0, r / b.hi)
}

// ---------------------------------------------------------------------------
// operator traits - default normalized algorithms
// ---------------------------------------------------------------------------

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $lhs:ty, $rhs:ty, $f:path) => {
        impl std::ops::$trait<$rhs> for $lhs {
            type Output = Pair;

            #[inline]
            fn $method(self, rhs: $rhs) -> Pair {
                $f(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, Pair, Pair, add);
forward_binop!(Sub, sub, Pair, Pair, sub);
forward_binop!(Mul, mul, Pair, Pair, mul);
forward_binop!(Div, div, Pair, Pair, div);
forward_binop!(Add, add, Pair, f64, add_pd);
forward_binop!(Add, add, f64, Pair, add_dp);
forward_binop!(Sub, sub, Pair, f64, sub_pd_op);
forward_binop!(Mul, mul, Pair, f64, mul_pd);
forward_binop!(Mul, mul, f64, Pair, mul_dp);
forward_binop!(Div, div, Pair, f64, div_pd);
forward_binop!(Div, div, f64, Pair, div_dp);

#[inline]
fn sub_pd_op(a: Pair, b: f64) -> Pair {
    add_pd(a, -b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const P60: f64 = f64::from_bits(0x3c30000000000000); // 2^-60

    #[test]
    fn full_cancellation_gives_exact_zero() {
        let a = Pair::new(1.0, P60);
        let r = add(a, -a);
        assert_eq!(r.hi, 0.0);
        assert_eq!(r.lo, 0.0);
        assert!(!r.hi.is_nan());
    }

    #[test]
    fn head_cancellation_keeps_low_limbs() {
        // High limbs cancel exactly; the result is the low-limb sum.
        let a = Pair::new(1.5, f64::from_bits(0x3c80000000000000)); // 2^-55
        let b = Pair::new(-1.5, f64::from_bits(0x3c70000000000000)); // 2^-56
        let r = add(a, b);
        assert_eq!(r.hi, a.lo + b.lo);
        assert_eq!(r.lo, 0.0);
    }

    #[test]
    fn operator_traits_use_default_algorithms() {
        let a = Pair::new(1.5, P60);
        let b = Pair::new(0.75, -P60);
        assert_eq!((a + b).to_bits(), add(a, b).to_bits());
        assert_eq!((a - b).to_bits(), sub(a, b).to_bits());
        assert_eq!((a * b).to_bits(), mul(a, b).to_bits());
        assert_eq!((a / b).to_bits(), div(a, b).to_bits());
        assert_eq!((a * 2.0).to_bits(), mul_pd(a, 2.0).to_bits());
        assert_eq!((2.0 / a).to_bits(), div_dp(2.0, a).to_bits());
    }

    #[test]
    fn division_by_zero_pair_is_untrapped() {
        let a = Pair::new(3.0, 0.0);
        let r = div(a, Pair::ZERO);
        assert!(r.hi.is_infinite() || r.hi.is_nan());
        let r = div_dd(1.0, 0.0);
        assert!(r.hi.is_infinite() || r.hi.is_nan());
    }

    #[test]
    fn exact_quotients_stay_exact() {
        assert_eq!(div_dd(3.0, 1.5), Pair::new(2.0, 0.0));
        assert_eq!(div(Pair::new(3.0, 0.0), Pair::new(1.5, 0.0)), Pair::new(2.0, 0.0));
    }
}
