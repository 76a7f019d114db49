//! Sampling accuracy harness
//!
//! Draws random inputs for every shape class, runs each dispatch-table
//! variant against the 256-bit reference and prints the worst observed
//! distance (in 2^-106 units) per variant, together with the offending
//! input bits. Finishes by recomputing the historic worst-case dataset:
//! mismatches are reported, and any fresh peak prints as a ready-to-paste
//! dataset line.
//!
//! Pair-unary inputs and the left pair x pair operand draw from the [1, 2)
//! sampler; every other operand draws from the full-range samplers.
//!
//! Environment: `F64PAIR_TRIALS` (default 4096) and `F64PAIR_SEED`
//! (default 1) override the sample count and the generator seed.

use std::env;

use f64pair::oracle;
use f64pair::regression::{RegressionSet, Shape, WorstCase};
use f64pair::report;
use f64pair::table;
use f64pair::test_utils::TestRng;

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Worst observation for one table entry.
struct Peak {
    name: &'static str,
    shape: Shape,
    ulp: f64,
    args: Vec<u64>,
    result: (u64, u64),
    reference: (u64, u64),
}

impl Peak {
    fn new(name: &'static str, shape: Shape) -> Self {
        Peak {
            name,
            shape,
            ulp: -1.0,
            args: Vec::new(),
            result: (0, 0),
            reference: (0, 0),
        }
    }

    fn update(&mut self, ulp: f64, args: &[u64], result: (u64, u64), reference: (u64, u64)) {
        if ulp > self.ulp {
            self.ulp = ulp;
            self.args = args.to_vec();
            self.result = result;
            self.reference = reference;
        }
    }

    fn cells(&self) -> Vec<u64> {
        let mut c = self.args.clone();
        c.extend([self.result.0, self.result.1, self.reference.0, self.reference.1]);
        c
    }
}

fn print_class(title: &str, cols: &[&str], peaks: &[Peak]) {
    report::print_title(title);
    report::print_header(cols);
    for p in peaks {
        report::print_row(p.name, p.ulp, &p.cells());
    }
}

fn main() {
    let trials = env_u64("F64PAIR_TRIALS", 4096) as usize;
    let seed = env_u64("F64PAIR_SEED", 1);
    let mut rng = TestRng::new(seed);
    let mut peaks: Vec<Peak> = Vec::new();

    println!("f64pair accuracy harness: {trials} trials, seed {seed}");

    // double -> pair
    let mut ps: Vec<Peak> = table::OPS_D
        .iter()
        .map(|o| Peak::new(o.name, Shape::D))
        .collect();
    for _ in 0..trials {
        let x = rng.next_f64();
        let rx = oracle::real_of(x);
        for (op, pk) in table::OPS_D.iter().zip(&mut ps) {
            let r = (op.f)(x);
            let truth = (op.oracle)(&rx);
            let d = oracle::ulp_dist(&truth, r);
            pk.update(d, &[x.to_bits()], r.to_bits(), oracle::to_pair(&truth).to_bits());
        }
    }
    print_class(
        "double -> pair",
        &["x", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // pair -> pair
    let mut ps: Vec<Peak> = table::OPS_P
        .iter()
        .map(|o| Peak::new(o.name, Shape::P))
        .collect();
    for _ in 0..trials {
        let a = rng.next_pair_12();
        let ra = oracle::to_real(a);
        for (op, pk) in table::OPS_P.iter().zip(&mut ps) {
            let r = (op.f)(a);
            let truth = (op.oracle)(&ra);
            let d = oracle::ulp_dist(&truth, r);
            let bits = a.to_bits();
            pk.update(
                d,
                &[bits.0, bits.1],
                r.to_bits(),
                oracle::to_pair(&truth).to_bits(),
            );
        }
    }
    print_class(
        "pair -> pair",
        &["a.hi", "a.lo", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // double x double -> pair
    let mut ps: Vec<Peak> = table::OPS_DD
        .iter()
        .map(|o| Peak::new(o.name, Shape::Dd))
        .collect();
    for _ in 0..trials {
        let a = rng.next_f64();
        let b = rng.next_f64();
        let ra = oracle::real_of(a);
        let rb = oracle::real_of(b);
        for (op, pk) in table::OPS_DD.iter().zip(&mut ps) {
            let r = (op.f)(a, b);
            let truth = (op.oracle)(&ra, &rb);
            let d = oracle::ulp_dist(&truth, r);
            pk.update(
                d,
                &[a.to_bits(), b.to_bits()],
                r.to_bits(),
                oracle::to_pair(&truth).to_bits(),
            );
        }
    }
    print_class(
        "double x double -> pair",
        &["a", "b", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // double x pair -> pair
    let mut ps: Vec<Peak> = table::OPS_DP
        .iter()
        .map(|o| Peak::new(o.name, Shape::Dp))
        .collect();
    for _ in 0..trials {
        let a = rng.next_f64();
        let b = rng.next_pair();
        let ra = oracle::real_of(a);
        let rb = oracle::to_real(b);
        for (op, pk) in table::OPS_DP.iter().zip(&mut ps) {
            let r = (op.f)(a, b);
            let truth = (op.oracle)(&ra, &rb);
            let d = oracle::ulp_dist(&truth, r);
            let bb = b.to_bits();
            pk.update(
                d,
                &[a.to_bits(), bb.0, bb.1],
                r.to_bits(),
                oracle::to_pair(&truth).to_bits(),
            );
        }
    }
    print_class(
        "double x pair -> pair",
        &["a", "b.hi", "b.lo", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // pair x double -> pair
    let mut ps: Vec<Peak> = table::OPS_PD
        .iter()
        .map(|o| Peak::new(o.name, Shape::Pd))
        .collect();
    for _ in 0..trials {
        let a = rng.next_pair();
        let b = rng.next_f64();
        let ra = oracle::to_real(a);
        let rb = oracle::real_of(b);
        for (op, pk) in table::OPS_PD.iter().zip(&mut ps) {
            let r = (op.f)(a, b);
            let truth = (op.oracle)(&ra, &rb);
            let d = oracle::ulp_dist(&truth, r);
            let ab = a.to_bits();
            pk.update(
                d,
                &[ab.0, ab.1, b.to_bits()],
                r.to_bits(),
                oracle::to_pair(&truth).to_bits(),
            );
        }
    }
    print_class(
        "pair x double -> pair",
        &["a.hi", "a.lo", "b", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // pair x pair -> pair
    let mut ps: Vec<Peak> = table::OPS_PP
        .iter()
        .map(|o| Peak::new(o.name, Shape::Pp))
        .collect();
    for _ in 0..trials {
        let a = rng.next_pair_12();
        let b = rng.next_pair();
        let ra = oracle::to_real(a);
        let rb = oracle::to_real(b);
        for (op, pk) in table::OPS_PP.iter().zip(&mut ps) {
            let r = (op.f)(a, b);
            let truth = (op.oracle)(&ra, &rb);
            let d = oracle::ulp_dist(&truth, r);
            let ab = a.to_bits();
            let bb = b.to_bits();
            pk.update(
                d,
                &[ab.0, ab.1, bb.0, bb.1],
                r.to_bits(),
                oracle::to_pair(&truth).to_bits(),
            );
        }
    }
    print_class(
        "pair x pair -> pair",
        &["a.hi", "a.lo", "b.hi", "b.lo", "r.hi", "r.lo", "ref.hi", "ref.lo"],
        &ps,
    );
    peaks.extend(ps);

    // historic worst cases: recompute, report drift, collect fresh peaks
    let recorded = match RegressionSet::builtin() {
        Ok(set) => set,
        Err(e) => {
            eprintln!("worst-case dataset unreadable: {e}");
            return;
        }
    };
    let mismatches = recorded.check();
    println!("\nworst-case dataset: {} entries rechecked", recorded.cases.len());
    if mismatches.is_empty() {
        println!("all recorded results reproduced bit-exactly");
    }
    for m in &mismatches {
        match m.got {
            Some((hi, lo)) => println!(
                "  {}: recorded {} {} recomputed {} {}",
                m.name,
                report::hex(m.expected.0),
                report::hex(m.expected.1),
                report::hex(hi),
                report::hex(lo),
            ),
            None => println!("  {}: no longer in the dispatch tables", m.name),
        }
    }

    let mut fresh = RegressionSet::default();
    for pk in &peaks {
        let beats = match recorded.cases.get(pk.name) {
            Some(c) => pk.ulp > c.ulp,
            None => pk.ulp > 0.0,
        };
        if beats {
            fresh.cases.insert(
                pk.name.to_string(),
                WorstCase {
                    shape: pk.shape,
                    ulp: pk.ulp,
                    args: pk.args.clone(),
                    result: pk.result,
                },
            );
        }
    }
    if !fresh.cases.is_empty() {
        println!("\nfresh peaks (dataset lines):");
        print!("{fresh}");
    }
}
