use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::katas::pair_with_sum;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 1, tags = ["y2020"])]
pub struct Solver;

const TARGET: i64 = 2020;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|s| {
                s.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad expense {:?}", s)))
            })
            .collect()
    }
}

fn triple_with_sum(entries: &[i64], target: i64) -> Option<(i64, i64, i64)> {
    entries.iter().enumerate().find_map(|(i, &first)| {
        pair_with_sum(&entries[i + 1..], target - first).map(|(a, b)| (first, a, b))
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        pair_with_sum(shared, TARGET)
            .map(|(a, b)| (a * b).to_string())
            .ok_or_else(|| SolveError::failed("no pair sums to 2020"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        triple_with_sum(shared, TARGET)
            .map(|(a, b, c)| (a * b * c).to_string())
            .ok_or_else(|| SolveError::failed("no triple sums to 2020"))
    }
}
