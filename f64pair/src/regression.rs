//! Historic worst-case regression dataset
//!
//! Each entry records, for one operation variant, the worst input observed
//! so far and the bit-exact result it produced. The checker recomputes every
//! entry through the dispatch tables and reports mismatches - a mismatch
//! signals either a latent bug or an intentional algorithm change, so it is
//! advisory, never a failure of the run.
//!
//! The dataset is plain text, loaded externally and passed around by value;
//! there is no process-wide mutable table. Line format (whitespace
//! separated, `#` comments):
//!
//! ```text
//! name shape ulp arg-bits... r.hi-bits r.lo-bits
//! ```
//!
//! with `shape` one of `d p dd dp pd pp` and all bit patterns in hex.

use std::collections::BTreeMap;
use std::fmt;

use crate::pair::Pair;
use crate::table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    D,
    P,
    Dd,
    Dp,
    Pd,
    Pp,
}

impl Shape {
    fn parse(s: &str) -> Option<Shape> {
        Some(match s {
            "d" => Shape::D,
            "p" => Shape::P,
            "dd" => Shape::Dd,
            "dp" => Shape::Dp,
            "pd" => Shape::Pd,
            "pp" => Shape::Pp,
            _ => return None,
        })
    }

    fn tag(self) -> &'static str {
        match self {
            Shape::D => "d",
            Shape::P => "p",
            Shape::Dd => "dd",
            Shape::Dp => "dp",
            Shape::Pd => "pd",
            Shape::Pp => "pp",
        }
    }

    /// Number of argument bit patterns the shape carries.
    fn arg_count(self) -> usize {
        match self {
            Shape::D => 1,
            Shape::P | Shape::Dd => 2,
            Shape::Dp | Shape::Pd => 3,
            Shape::Pp => 4,
        }
    }
}

/// Worst-observed input and result for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct WorstCase {
    pub shape: Shape,
    pub ulp: f64,
    pub args: Vec<u64>,
    pub result: (u64, u64),
}

/// A recorded-vs-recomputed discrepancy. `got == None` means the named
/// operation is no longer in the dispatch tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub name: String,
    pub expected: (u64, u64),
    pub got: Option<(u64, u64)>,
}

#[derive(Debug, thiserror::Error)]
pub enum RegressionError {
    #[error("line {line}: expected `name shape ulp args.. r.hi r.lo`")]
    Malformed { line: usize },
    #[error("line {line}: unknown shape `{shape}`")]
    UnknownShape { line: usize, shape: String },
    #[error("line {line}: bad bit pattern")]
    BadLimb {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("line {line}: bad ulp value")]
    BadUlp {
        line: usize,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// The dataset: operation name → worst case, ordered for stable output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegressionSet {
    pub cases: BTreeMap<String, WorstCase>,
}

fn parse_hex(tok: &str, line: usize) -> Result<u64, RegressionError> {
    let digits = tok.strip_prefix("0x").unwrap_or(tok);
    u64::from_str_radix(digits, 16).map_err(|source| RegressionError::BadLimb { line, source })
}

impl RegressionSet {
    pub fn parse(text: &str) -> Result<Self, RegressionError> {
        let mut cases = BTreeMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let body = raw.split('#').next().unwrap_or("").trim();
            if body.is_empty() {
                continue;
            }
            let toks: Vec<&str> = body.split_whitespace().collect();
            if toks.len() < 3 {
                return Err(RegressionError::Malformed { line });
            }
            let name = toks[0].to_string();
            let shape = Shape::parse(toks[1]).ok_or_else(|| RegressionError::UnknownShape {
                line,
                shape: toks[1].to_string(),
            })?;
            let ulp: f64 = toks[2]
                .parse()
                .map_err(|source| RegressionError::BadUlp { line, source })?;

            let n = shape.arg_count();
            if toks.len() != 3 + n + 2 {
                return Err(RegressionError::Malformed { line });
            }
            let mut args = Vec::with_capacity(n);
            for t in &toks[3..3 + n] {
                args.push(parse_hex(t, line)?);
            }
            let r_hi = parse_hex(toks[3 + n], line)?;
            let r_lo = parse_hex(toks[4 + n], line)?;

            cases.insert(
                name,
                WorstCase {
                    shape,
                    ulp,
                    args,
                    result: (r_hi, r_lo),
                },
            );
        }
        Ok(RegressionSet { cases })
    }

    /// The dataset shipped with the crate (hand-verified exact cases; the
    /// accuracy harness prints replacement lines when it observes new peaks).
    pub fn builtin() -> Result<Self, RegressionError> {
        Self::parse(include_str!("../data/worst_cases.txt"))
    }

    /// Recompute every recorded input through the dispatch tables and
    /// collect the entries whose result bits no longer match.
    pub fn check(&self) -> Vec<Mismatch> {
        let mut out = Vec::new();
        for (name, case) in &self.cases {
            let got = recompute(name, case);
            if got != Some(case.result) {
                out.push(Mismatch {
                    name: name.clone(),
                    expected: case.result,
                    got,
                });
            }
        }
        out
    }
}

fn recompute(name: &str, case: &WorstCase) -> Option<(u64, u64)> {
    let d = |i: usize| f64::from_bits(case.args[i]);
    let p = |i: usize| Pair::from_bits((case.args[i], case.args[i + 1]));
    let r = match case.shape {
        Shape::D => (table::OPS_D.iter().find(|o| o.name == name)?.f)(d(0)),
        Shape::P => (table::OPS_P.iter().find(|o| o.name == name)?.f)(p(0)),
        Shape::Dd => (table::OPS_DD.iter().find(|o| o.name == name)?.f)(d(0), d(1)),
        Shape::Dp => (table::OPS_DP.iter().find(|o| o.name == name)?.f)(d(0), p(1)),
        Shape::Pd => (table::OPS_PD.iter().find(|o| o.name == name)?.f)(p(0), d(2)),
        Shape::Pp => (table::OPS_PP.iter().find(|o| o.name == name)?.f)(p(0), p(2)),
    };
    Some(r.to_bits())
}

impl fmt::Display for RegressionSet {
    /// Serializes back to the external text format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, c) in &self.cases {
            write!(f, "{} {} {}", name, c.shape.tag(), c.ulp)?;
            for a in &c.args {
                write!(f, " 0x{:016x}", a)?;
            }
            writeln!(f, " 0x{:016x} 0x{:016x}", c.result.0, c.result.1)?;
        }
        Ok(())
    }
}
