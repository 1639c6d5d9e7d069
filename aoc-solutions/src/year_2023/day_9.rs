use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_numbers;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["y2023", "math"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let histories: Vec<Vec<i64>> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(extract_numbers)
            .collect();
        if histories.iter().any(Vec::is_empty) {
            return Err(ParseError::InvalidFormat("empty history".into()));
        }
        Ok(histories)
    }
}

/// The value that continues `history`, found by repeated differencing
pub fn extrapolate(history: &[i64]) -> i64 {
    let mut row = history.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        next += row.last().copied().unwrap_or(0);
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i64 = shared
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn single_history() {
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
        assert_eq!(extrapolate(&[7]), 7);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "114");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "2");
    }
}
