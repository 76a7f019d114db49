//! The two-component pair value type and its predicates
//!
//! A `Pair` represents a real number as the unevaluated sum `hi + lo` of two
//! binary64 values. Pairs are immutable, passed by value and never alias.
//!
//! Two contract families share this one type:
//!
//! * **normalized** - `|lo| <= ulp(hi)/2`; produced by the default arithmetic
//!   operations and by the error-free transformations in [`crate::eft`].
//! * **relaxed** - produced by the `_q` ("quick") operation variants, which
//!   skip the final renormalization. The low limb may overlap the high limb;
//!   consumers must not assume the normalized invariant.

use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};

/// Unevaluated sum of two binary64 values.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Pair {
    pub hi: f64,
    pub lo: f64,
}

impl Pair {
    pub const ZERO: Pair = Pair { hi: 0.0, lo: 0.0 };
    pub const ONE: Pair = Pair { hi: 1.0, lo: 0.0 };

    #[inline]
    pub const fn new(hi: f64, lo: f64) -> Self {
        Self { hi, lo }
    }

    /// Reconstruct a pair from the IEEE bit patterns of its limbs.
    #[inline]
    pub const fn from_bits(bits: (u64, u64)) -> Self {
        Self {
            hi: f64::from_bits(bits.0),
            lo: f64::from_bits(bits.1),
        }
    }

    /// IEEE bit patterns of `(hi, lo)`.
    #[inline]
    pub const fn to_bits(self) -> (u64, u64) {
        (self.hi.to_bits(), self.lo.to_bits())
    }

    /// The value collapsed to a single binary64 (drops the low limb's
    /// contribution beyond one rounding).
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Magnitude: negates a pair whose value is below zero. The sign of a
    /// canonical pair is the sign of `hi`, with `lo` breaking the tie when
    /// `hi` is zero.
    #[inline]
    pub fn abs(self) -> Self {
        if self.hi < 0.0 || (self.hi == 0.0 && self.lo < 0.0) {
            -self
        } else {
            self
        }
    }

    /// Canonical-decomposition test: `|lo| <= ulp(hi)/2`.
    ///
    /// Holds for every pair returned by a normalized-family operation and for
    /// raw EFT output. Not guaranteed for `_q` variant results.
    #[inline]
    pub fn is_normalized(self) -> bool {
        self.lo == 0.0 || self.lo.abs() <= 0.5 * ulp(self.hi)
    }
}

/// Unit in the last place of `x`: the spacing from `|x|` to the next larger
/// representable magnitude.
#[inline]
pub fn ulp(x: f64) -> f64 {
    let ax = x.abs();
    if !ax.is_finite() {
        return f64::NAN;
    }
    f64::from_bits(ax.to_bits() + 1) - ax
}

impl From<f64> for Pair {
    #[inline]
    fn from(x: f64) -> Self {
        Self { hi: x, lo: 0.0 }
    }
}

impl std::ops::Neg for Pair {
    type Output = Pair;

    #[inline]
    fn neg(self) -> Pair {
        Pair::new(-self.hi, -self.lo)
    }
}

impl Zero for Pair {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.hi == 0.0 && self.lo == 0.0
    }
}

impl One for Pair {
    fn one() -> Self {
        Self::ONE
    }
}

/// Error parsing the bit-exact text form of a pair.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParsePairError {
    #[error("expected `<hex>,<hex>` limb bit patterns, got `{0}`")]
    Malformed(String),
    #[error("invalid limb bit pattern")]
    BadLimb(#[from] std::num::ParseIntError),
}

fn parse_limb(tok: &str) -> Result<u64, ParsePairError> {
    let tok = tok.trim();
    let digits = tok.strip_prefix("0x").unwrap_or(tok);
    Ok(u64::from_str_radix(digits, 16)?)
}

impl FromStr for Pair {
    type Err = ParsePairError;

    /// Parses the bit-exact form produced by [`fmt::Display`], e.g.
    /// `0x3ff0000000000000,0x0000000000000000`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hi, lo) = s
            .split_once(',')
            .ok_or_else(|| ParsePairError::Malformed(s.to_string()))?;
        Ok(Pair::from_bits((parse_limb(hi)?, parse_limb(lo)?)))
    }
}

impl fmt::Display for Pair {
    /// Bit-exact hex form, round-trippable through [`FromStr`]. This is the
    /// representation used by the regression dataset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, l) = self.to_bits();
        write!(f, "0x{:016x},0x{:016x}", h, l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulp_spacing() {
        assert_eq!(ulp(1.0), f64::EPSILON);
        assert_eq!(ulp(-1.0), f64::EPSILON);
        assert_eq!(ulp(2.0), 2.0 * f64::EPSILON);
        assert_eq!(ulp(0.0), f64::from_bits(1));
    }

    #[test]
    fn normalized_predicate() {
        assert!(Pair::new(1.0, 0.5 * f64::EPSILON).is_normalized());
        assert!(!Pair::new(1.0, f64::EPSILON).is_normalized());
        assert!(Pair::new(1.0, 0.0).is_normalized());
        assert!(Pair::ZERO.is_normalized());
    }

    #[test]
    fn abs_negates_only_below_zero() {
        let p = Pair::new(1.5, -1e-20);
        assert_eq!(p.abs(), p);
        assert_eq!((-p).abs(), p);
        // zero head: the low limb carries the sign
        assert_eq!(Pair::new(0.0, -1e-300).abs(), Pair::new(0.0, 1e-300));
        assert_eq!(Pair::ZERO.abs(), Pair::ZERO);
    }

    #[test]
    fn ordering_is_lexicographic_on_canonical_pairs() {
        let a = Pair::new(1.0, -1e-20);
        let b = Pair::new(1.0, 0.0);
        let c = Pair::new(2.0, -1e-17);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a, a);
    }

    #[test]
    fn bit_text_round_trip() {
        let p = Pair::new(1.0, f64::from_bits(0x3c30000000000000));
        let s = p.to_string();
        assert_eq!(s, "0x3ff0000000000000,0x3c30000000000000");
        assert_eq!(s.parse::<Pair>().unwrap(), p);
    }

    #[test]
    fn bad_text_is_reported() {
        assert!(matches!(
            "0x3ff0000000000000".parse::<Pair>(),
            Err(ParsePairError::Malformed(_))
        ));
        assert!(matches!(
            "0xzz,0x0".parse::<Pair>(),
            Err(ParsePairError::BadLimb(_))
        ));
    }
}
