use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["y2015", "graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Value(u16),
    Wire(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    Pass(Operand<'a>),
    Not(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
}

/// Gate driving each wire
pub type Circuit<'a> = HashMap<&'a str, Gate<'a>>;

fn operand(token: &str) -> Operand<'_> {
    token
        .parse()
        .map(Operand::Value)
        .unwrap_or(Operand::Wire(token))
}

fn parse_gate(expr: &str) -> anyhow::Result<Gate<'_>> {
    let tokens: Vec<&str> = expr.split_whitespace().collect();
    Ok(match tokens.as_slice() {
        [a] => Gate::Pass(operand(a)),
        ["NOT", a] => Gate::Not(operand(a)),
        [a, "AND", b] => Gate::And(operand(a), operand(b)),
        [a, "OR", b] => Gate::Or(operand(a), operand(b)),
        [a, "LSHIFT", b] => Gate::LShift(operand(a), operand(b)),
        [a, "RSHIFT", b] => Gate::RShift(operand(a), operand(b)),
        _ => bail!("unknown gate {:?}", expr),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| -> anyhow::Result<(&'a str, Gate<'a>)> {
                let (expr, wire) = line
                    .split_once(" -> ")
                    .ok_or_else(|| anyhow!("missing '->' in {:?}", line))?;
                Ok((wire.trim(), parse_gate(expr)?))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Resolves wire signals on demand, remembering each one
struct Evaluator<'c, 'a> {
    circuit: &'c Circuit<'a>,
    signals: HashMap<&'a str, u16>,
}

impl<'c, 'a> Evaluator<'c, 'a> {
    fn new(circuit: &'c Circuit<'a>, overrides: &[(&'a str, u16)]) -> Self {
        Self {
            circuit,
            signals: overrides.iter().copied().collect(),
        }
    }

    fn operand(&mut self, op: Operand<'a>) -> Result<u16, SolveError> {
        match op {
            Operand::Value(v) => Ok(v),
            Operand::Wire(w) => self.signal(w),
        }
    }

    fn signal(&mut self, wire: &'a str) -> Result<u16, SolveError> {
        if let Some(&v) = self.signals.get(wire) {
            return Ok(v);
        }
        let gate = *self
            .circuit
            .get(wire)
            .ok_or_else(|| SolveError::failed(format!("wire {} has no input", wire)))?;
        let value = match gate {
            Gate::Pass(a) => self.operand(a)?,
            Gate::Not(a) => !self.operand(a)?,
            Gate::And(a, b) => self.operand(a)? & self.operand(b)?,
            Gate::Or(a, b) => self.operand(a)? | self.operand(b)?,
            Gate::LShift(a, b) => self.operand(a)?.wrapping_shl(self.operand(b)? as u32),
            Gate::RShift(a, b) => self.operand(a)?.wrapping_shr(self.operand(b)? as u32),
        };
        self.signals.insert(wire, value);
        Ok(value)
    }
}

pub fn signal_on<'a>(
    circuit: &Circuit<'a>,
    wire: &'a str,
    overrides: &[(&'a str, u16)],
) -> Result<u16, SolveError> {
    Evaluator::new(circuit, overrides).signal(wire)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(signal_on(shared, "a", &[])?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = signal_on(shared, "a", &[])?;
        Ok(signal_on(shared, "a", &[("b", a)])?.to_string())
    }
}
