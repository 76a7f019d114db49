//! Deterministic test-input generation
//!
//! A small combined generator (an LCG paired with a xorshift-rotate state
//! update, period 2^64·(2^64-1)) plus the float and pair samplers the
//! accuracy harness draws from. One explicit seed, by-value state, no
//! process-wide generator: the harness is single-threaded by design and
//! reruns are reproducible.

use crate::eft::fast_two_sum;
use crate::pair::Pair;

const LCG_MUL: u64 = 0xd1342543de82ef95;
const LCG_ADD: u64 = 0x2545f4914f6cdd1d;
const XGB_L0: u64 = 0xc2b2ae3d27d4eb4f;
const XGB_H0: u64 = 0x99bcf6822b23ca35;

const ONE_BITS: u64 = 0x3ff0000000000000;
const P53: f64 = 1.0 / 9007199254740992.0; // 2^-53
const P54: f64 = 0.5 * P53;

#[inline]
fn mix(x: u64) -> u64 {
    let x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    let x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Combined LCG + xorshift-rotate generator with explicit seeding.
pub struct TestRng {
    lcg: u64,
    xgb: [u64; 2],
}

impl TestRng {
    /// Create a generator from a seed. Any two seeds put the sequences at
    /// least 2^127 steps apart.
    pub fn new(seed: u64) -> Self {
        let mut g = TestRng {
            lcg: seed,
            xgb: [XGB_L0, XGB_H0],
        };
        // walk a few steps so nearby seeds decorrelate
        g.next_u64();
        g.next_u64();
        g.next_u64();
        g
    }

    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.xgb[0];
        let s1 = self.xgb[1] ^ s0;
        let s2 = self.lcg;
        let r = mix(s0.wrapping_add(s2));

        self.lcg = LCG_MUL.wrapping_mul(s2).wrapping_add(LCG_ADD);
        self.xgb[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.xgb[1] = s1.rotate_left(36);
        r
    }

    /// Uniform equidistant double on [0, 1) (53-bit grid).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * P53
    }

    /// Double on [0, 2) with all significand bits populated (the plain
    /// equidistant draw leaves trailing zeros in small values; the XOR can
    /// also flip the bottom exponent bit).
    pub fn next_odd_f64(&mut self) -> f64 {
        let d = self.next_f64();
        let u = self.next_u64() >> 11;
        f64::from_bits(d.to_bits() ^ u)
    }

    /// [`next_f64`] with a uniform random sign.
    pub fn next_signed_f64(&mut self) -> f64 {
        let x = self.next_f64();
        if self.next_u64() & 1 == 0 {
            x
        } else {
            -x
        }
    }

    /// Uniform double on [1, 2) with a fully-populated significand.
    pub fn next_f64_12(&mut self) -> f64 {
        f64::from_bits((self.next_u64() >> 12) ^ ONE_BITS)
    }

    /// Normalized pair on [1, 2): both limbs carry fully-populated
    /// significands, `lo` scaled below `ulp(hi)/2`.
    pub fn next_pair_12(&mut self) -> Pair {
        let h = self.next_f64_12();
        let l = self.next_f64_12() * P54;
        Pair::new(h, l)
    }

    /// Normalized pair on [0, 2), renormalized through Fast2Sum.
    pub fn next_pair(&mut self) -> Pair {
        let hi = self.next_odd_f64();
        let u = self.next_u64() >> 12;
        let lo = hi * P54;
        let lo = f64::from_bits(lo.to_bits() ^ u);
        fast_two_sum(hi, lo)
    }
}
