use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Dir;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 9, tags = ["y2022", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Dir, u32)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| -> Result<(Dir, u32), ParseError> {
                let bad = || ParseError::InvalidFormat(format!("bad motion {:?}", line));
                let (dir, steps) = line.trim().split_once(' ').ok_or_else(bad)?;
                let dir = dir.chars().next().and_then(Dir::from_char).ok_or_else(bad)?;
                Ok((dir, steps.parse().map_err(|_| bad())?))
            })
            .collect()
    }
}

/// Positions visited by the last of `knots` knots
pub fn tail_visits(motions: &[(Dir, u32)], knots: usize) -> usize {
    let mut rope = vec![(0i64, 0i64); knots];
    let mut visited = HashSet::from([(0, 0)]);
    for &(dir, steps) in motions {
        let (dx, dy) = dir.delta();
        for _ in 0..steps {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for i in 1..knots {
                let (hx, hy) = rope[i - 1];
                let (tx, ty) = &mut rope[i];
                if (hx - *tx).abs() > 1 || (hy - *ty).abs() > 1 {
                    *tx += (hx - *tx).signum();
                    *ty += (hy - *ty).signum();
                }
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tail_visits(shared, 10).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGER: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn two_knots() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "13");
    }

    #[test]
    fn ten_knots() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1");
        assert_eq!(solve_example::<Solver>(LARGER, 2), "36");
    }
}
