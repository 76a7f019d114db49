//! Sampled oracle bounds for the arithmetic layer.
//!
//! Distances are in units of 2^-106 relative to the true result. Bounds are
//! generous multiples of the empirical worst cases so the fixed-seed runs
//! stay deterministic.

use f64pair::arith;
use f64pair::oracle::{self, Real};
use f64pair::pair::Pair;
use f64pair::test_utils::TestRng;

const TRIALS: usize = 2000;

fn dist2(f: fn(Pair, Pair) -> Pair, o: fn(&Real, &Real) -> Real, a: Pair, b: Pair) -> f64 {
    let truth = o(&oracle::to_real(a), &oracle::to_real(b));
    oracle::ulp_dist(&truth, f(a, b))
}

#[test]
fn accurate_add_and_sub_stay_below_eight_units() {
    let mut rng = TestRng::new(21);
    for _ in 0..TRIALS {
        let a = rng.next_pair_12();
        let b = rng.next_pair_12();
        // the two-pass bound holds under head cancellation too
        assert!(dist2(arith::add, oracle::add, a, b) < 8.0, "add {a} {b}");
        assert!(dist2(arith::sub, oracle::sub, a, b) < 8.0, "sub {a} {b}");
        assert!(dist2(arith::osub, oracle::sub, a, b) < 8.0, "osub {a} {b}");
        assert!(dist2(arith::osub, oracle::sub, b, a) < 8.0, "osub {b} {a}");
    }
}

#[test]
fn mul_and_div_bounds() {
    let mut rng = TestRng::new(22);
    for _ in 0..TRIALS {
        let a = rng.next_pair_12();
        let b = rng.next_pair_12();
        assert!(dist2(arith::mul, oracle::mul, a, b) < 16.0, "mul {a} {b}");
        assert!(dist2(arith::div, oracle::div, a, b) < 32.0, "div {a} {b}");
        assert!(dist2(arith::div_a, oracle::div, a, b) < 16.0, "div_a {a} {b}");
    }
}

#[test]
fn quick_and_single_pass_variants_within_thirty_two_units() {
    let mut rng = TestRng::new(23);
    for _ in 0..TRIALS {
        let a = rng.next_pair_12();
        let b = rng.next_pair_12();
        assert!(dist2(arith::add_q, oracle::add, a, b) < 32.0, "add_q {a} {b}");
        assert!(dist2(arith::add_s, oracle::add, a, b) < 32.0, "add_s {a} {b}");
        assert!(dist2(arith::mul_q, oracle::mul, a, b) < 32.0, "mul_q {a} {b}");
        assert!(dist2(arith::div_q, oracle::div, a, b) < 32.0, "div_q {a} {b}");

        // single-pass subtraction is only quoted away from head cancellation;
        // scale one operand so the heads stay separated
        let c = arith::mul_pd(b, 0.25);
        assert!(dist2(arith::sub_s, oracle::sub, a, c) < 32.0, "sub_s {a} {c}");
        assert!(dist2(arith::sub_q, oracle::sub, a, c) < 32.0, "sub_q {a} {c}");
        assert!(dist2(arith::osub_q, oracle::sub, a, c) < 32.0, "osub_q {a} {c}");
    }
}

#[test]
fn mixed_scalar_shapes_match_their_contracts() {
    let mut rng = TestRng::new(24);
    for _ in 0..TRIALS {
        let a = rng.next_f64_12();
        let b = rng.next_f64_12();
        let p = rng.next_pair_12();
        let ra = oracle::real_of(a);
        let rb = oracle::real_of(b);
        let rp = oracle::to_real(p);

        assert!(oracle::ulp_dist(&oracle::add(&ra, &rp), arith::add_dp(a, p)) < 8.0);
        assert!(oracle::ulp_dist(&oracle::mul(&rp, &ra), arith::mul_pd(p, a)) < 8.0);
        assert!(oracle::ulp_dist(&oracle::mul(&rp, &ra), arith::mul_pd_q(p, a)) < 32.0);
        assert!(oracle::ulp_dist(&oracle::div(&ra, &rp), arith::div_dp(a, p)) < 32.0);
        assert!(oracle::ulp_dist(&oracle::div(&rp, &ra), arith::div_pd(p, a)) < 32.0);
        assert!(oracle::ulp_dist(&oracle::div(&ra, &rb), arith::div_dd(a, b)) < 8.0);
        assert!(oracle::ulp_dist(&oracle::div(&ra, &rb), arith::div_dd_q(a, b)) < 8.0);
    }
}

#[test]
fn full_range_right_operands_keep_accurate_bounds() {
    // mirror the harness distribution: [1, 2) left operand, full-range right
    let mut rng = TestRng::new(26);
    for _ in 0..TRIALS {
        let a = rng.next_pair_12();
        let b = rng.next_pair();
        assert!(dist2(arith::add, oracle::add, a, b) < 8.0, "add {a} {b}");
        assert!(dist2(arith::sub, oracle::sub, a, b) < 8.0, "sub {a} {b}");
        assert!(dist2(arith::mul, oracle::mul, a, b) < 16.0, "mul {a} {b}");
    }
}

#[test]
fn default_variants_return_normalized_pairs() {
    let mut rng = TestRng::new(25);
    for _ in 0..TRIALS {
        let a = rng.next_pair_12();
        let b = rng.next_pair_12();
        assert!(arith::add(a, b).is_normalized());
        assert!(arith::mul(a, b).is_normalized());
        assert!(arith::div(a, b).is_normalized());
        assert!(arith::add_dp(a.hi, b).is_normalized());
        assert!(arith::div_dd(a.hi, b.hi).is_normalized());

        let c = arith::mul_pd(b, 0.25);
        assert!(arith::sub(a, c).is_normalized());
        assert!(arith::osub(a, c).is_normalized());
    }
}
