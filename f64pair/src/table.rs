//! Function-pointer dispatch tables for the accuracy harness
//!
//! One plain-data table per arity/shape class, pairing each operation
//! variant with its name and its arbitrary-precision reference. The harness
//! and the regression checker both iterate these; nothing here dispatches
//! dynamically.

use crate::oracle::{self, Real};
use crate::pair::Pair;
use crate::{arith, funcs};

pub type Oracle1 = fn(&Real) -> Real;
pub type Oracle2 = fn(&Real, &Real) -> Real;

/// double → pair
pub struct OpD {
    pub name: &'static str,
    pub f: fn(f64) -> Pair,
    pub oracle: Oracle1,
}

/// pair → pair
pub struct OpP {
    pub name: &'static str,
    pub f: fn(Pair) -> Pair,
    pub oracle: Oracle1,
}

/// double × double → pair
pub struct OpDd {
    pub name: &'static str,
    pub f: fn(f64, f64) -> Pair,
    pub oracle: Oracle2,
}

/// double × pair → pair
pub struct OpDp {
    pub name: &'static str,
    pub f: fn(f64, Pair) -> Pair,
    pub oracle: Oracle2,
}

/// pair × double → pair
pub struct OpPd {
    pub name: &'static str,
    pub f: fn(Pair, f64) -> Pair,
    pub oracle: Oracle2,
}

/// pair × pair → pair
pub struct OpPp {
    pub name: &'static str,
    pub f: fn(Pair, Pair) -> Pair,
    pub oracle: Oracle2,
}

pub static OPS_D: &[OpD] = &[
    OpD { name: "rsqrt_d", f: funcs::rsqrt_d, oracle: oracle::rec_sqrt },
    OpD { name: "rsqrt_dh", f: funcs::rsqrt_dh, oracle: oracle::rec_sqrt },
    OpD { name: "inv_d", f: funcs::inv_d, oracle: oracle::inv },
    OpD { name: "inv_dn", f: funcs::inv_dn, oracle: oracle::inv },
    OpD { name: "inv_dh", f: funcs::inv_dh, oracle: oracle::inv },
    OpD { name: "sqrt_d_q", f: funcs::sqrt_d_q, oracle: oracle::sqrt },
];

pub static OPS_P: &[OpP] = &[
    OpP { name: "inv_q", f: funcs::inv_q, oracle: oracle::inv },
    OpP { name: "inv_a", f: funcs::inv_a, oracle: oracle::inv },
    OpP { name: "inv", f: funcs::inv, oracle: oracle::inv },
    OpP { name: "sqrt", f: funcs::sqrt, oracle: oracle::sqrt },
    OpP { name: "sq", f: funcs::sq, oracle: oracle::sqr },
];

pub static OPS_DD: &[OpDd] = &[
    OpDd { name: "div_dd", f: arith::div_dd, oracle: oracle::div },
    OpDd { name: "div_dd_q", f: arith::div_dd_q, oracle: oracle::div },
];

pub static OPS_DP: &[OpDp] = &[
    OpDp { name: "add_dp", f: arith::add_dp, oracle: oracle::add },
    OpDp { name: "div_dp", f: arith::div_dp, oracle: oracle::div },
];

pub static OPS_PD: &[OpPd] = &[
    OpPd { name: "mul_pd", f: arith::mul_pd, oracle: oracle::mul },
    OpPd { name: "mul_pd_q", f: arith::mul_pd_q, oracle: oracle::mul },
    OpPd { name: "div_pd", f: arith::div_pd, oracle: oracle::div },
];

pub static OPS_PP: &[OpPp] = &[
    OpPp { name: "div_q", f: arith::div_q, oracle: oracle::div },
    OpPp { name: "div_a", f: arith::div_a, oracle: oracle::div },
    OpPp { name: "sub", f: arith::sub, oracle: oracle::sub },
    OpPp { name: "sub_q", f: arith::sub_q, oracle: oracle::sub },
    OpPp { name: "osub", f: arith::osub, oracle: oracle::sub },
    OpPp { name: "osub_q", f: arith::osub_q, oracle: oracle::sub },
    OpPp { name: "add", f: arith::add, oracle: oracle::add },
    OpPp { name: "add_q", f: arith::add_q, oracle: oracle::add },
    OpPp { name: "add_s", f: arith::add_s, oracle: oracle::add },
    OpPp { name: "mul", f: arith::mul, oracle: oracle::mul },
    OpPp { name: "mul_q", f: arith::mul_q, oracle: oracle::mul },
    OpPp { name: "div", f: arith::div, oracle: oracle::div },
    OpPp { name: "sub_s", f: arith::sub_s, oracle: oracle::sub },
];
