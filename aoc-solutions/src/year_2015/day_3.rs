use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Dir;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["y2015", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Dir>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                Dir::from_char(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad move {:?}", c)))
            })
            .collect()
    }
}

/// Houses visited by `carriers` deliverers taking moves in turn
fn houses_visited(moves: &[Dir], carriers: usize) -> usize {
    let mut positions = vec![(0i64, 0i64); carriers];
    let mut visited: HashSet<(i64, i64)> = HashSet::from([(0, 0)]);
    for (i, dir) in moves.iter().enumerate() {
        let pos = &mut positions[i % carriers];
        let (dx, dy) = dir.delta();
        *pos = (pos.0 + dx, pos.1 + dy);
        visited.insert(*pos);
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 2).to_string())
    }
}
