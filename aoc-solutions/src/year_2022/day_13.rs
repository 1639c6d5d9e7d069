use std::cmp::Ordering;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::{json, Value};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 13, tags = ["y2022", "parsing"])]
pub struct Solver;

fn is_packet(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_u64(),
        Value::Array(items) => items.iter().all(is_packet),
        _ => false,
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Value>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| match serde_json::from_str::<Value>(line) {
                Ok(v) if v.is_array() && is_packet(&v) => Ok(v),
                Ok(_) => Err(ParseError::InvalidFormat(format!("not a packet: {}", line))),
                Err(e) => Err(ParseError::InvalidFormat(format!("{}: {}", line, e))),
            })
            .collect()
    }
}

/// Packet order: integers by value, lists element-wise then by length, and a
/// lone integer compared against a list is treated as a one-element list
pub fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Array(l), Value::Array(r)) => l
            .iter()
            .zip(r)
            .map(|(a, b)| compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or_else(|| l.len().cmp(&r.len())),
        (Value::Array(_), _) => compare(left, &Value::Array(vec![right.clone()])),
        (_, Value::Array(_)) => compare(&Value::Array(vec![left.clone()]), right),
        _ => left.as_u64().cmp(&right.as_u64()),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: usize = shared
            .chunks(2)
            .enumerate()
            .filter(|(_, pair)| pair.len() == 2 && compare(&pair[0], &pair[1]).is_lt())
            .map(|(i, _)| i + 1)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Position of a divider is one more than the packets sorting before it
        let before = |divider: &Value| shared.iter().filter(|p| compare(p, divider).is_lt()).count();
        let first = before(&json!([[2]])) + 1;
        let second = before(&json!([[6]])) + 2;
        Ok((first * second).to_string())
    }
}
