//! Correct rounding of the three-term sums and double-rounding safety of
//! round-to-odd.
//!
//! The sampled triples span ~110 bits of exponent so the middle and small
//! terms genuinely fall into the rounding tail of the leading term.

use f64pair::eft::two_sum;
use f64pair::oracle;
use f64pair::roundodd::{add3_odd, add3_parity, add_ro};
use f64pair::test_utils::TestRng;

const TRIALS: usize = 4000;

const P30: f64 = f64::from_bits(0x3e10000000000000); // 2^-30
const P40: f64 = f64::from_bits(0x3d70000000000000); // 2^-40
const P53: f64 = f64::from_bits(0x3ca0000000000000); // 2^-53
const P60: f64 = f64::from_bits(0x3c30000000000000); // 2^-60
const P105: f64 = f64::from_bits(0x3960000000000000); // 2^-105

#[test]
fn three_term_sums_equal_the_exact_sum_rounded_once() {
    let mut rng = TestRng::new(41);
    for _ in 0..TRIALS {
        let a = rng.next_signed_f64();
        let b = rng.next_signed_f64() * P30;
        let c = rng.next_signed_f64() * P60;
        let truth =
            oracle::add(&oracle::add(&oracle::real_of(a), &oracle::real_of(b)), &oracle::real_of(c));
        let want = oracle::to_pair(&truth).hi;
        assert_eq!(add3_odd(a, b, c), want, "odd: {a:e} {b:e} {c:e}");
        assert_eq!(add3_parity(a, b, c), want, "parity: {a:e} {b:e} {c:e}");
    }
}

#[test]
fn naive_summation_double_rounds_where_these_do_not() {
    // 1 + 2^-53 is a tie; the 2^-105 crumb breaks it upward. Left-to-right
    // native summation loses the crumb and rounds the tie to even.
    let want = f64::from_bits(1.0f64.to_bits() + 1);
    assert_eq!((1.0 + P53) + P105, 1.0);
    assert_eq!(add3_odd(1.0, P53, P105), want);
    assert_eq!(add3_parity(1.0, P53, P105), want);
    // mirrored signs
    assert_eq!(add3_odd(-1.0, -P53, -P105), -want);
    assert_eq!(add3_parity(-1.0, -P53, -P105), -want);
}

#[test]
fn rounding_to_odd_marks_every_inexact_sum() {
    let mut rng = TestRng::new(42);
    for _ in 0..TRIALS {
        let x = rng.next_signed_f64();
        let y = rng.next_signed_f64() * P60;
        let s = two_sum(x, y);
        let r = add_ro(x, y);
        if s.lo == 0.0 {
            assert_eq!(r, s.hi);
        } else {
            assert_eq!(r.to_bits() & 1, 1, "x={x:e} y={y:e}");
            // the odd result is the nearest-or-adjacent double
            let moved = r.to_bits().abs_diff(s.hi.to_bits());
            assert!(moved <= 1);
        }
    }
}

#[test]
fn odd_intermediate_is_double_rounding_safe_to_f32() {
    let mut rng = TestRng::new(43);
    for _ in 0..TRIALS {
        let x = rng.next_signed_f64();
        let y = rng.next_signed_f64() * P40;
        let truth = oracle::add(&oracle::real_of(x), &oracle::real_of(y));
        assert_eq!(add_ro(x, y) as f32, oracle::to_f32(&truth), "x={x:e} y={y:e}");
    }
}
