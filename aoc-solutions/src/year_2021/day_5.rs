use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["y2021", "grid"])]
pub struct Solver;

/// Endpoints `(x1, y1, x2, y2)`
pub type Line = (i32, i32, i32, i32);

impl AocParser for Solver {
    type SharedData<'a> = Vec<Line>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match extract_unsigned::<i32>(line).as_slice() {
                &[x1, y1, x2, y2] => Ok((x1, y1, x2, y2)),
                _ => Err(ParseError::InvalidFormat(format!("bad vent line {:?}", line))),
            })
            .collect()
    }
}

fn overlaps(lines: &[Line], diagonals: bool) -> usize {
    let mut covered: HashMap<(i32, i32), u32> = HashMap::new();
    for &(x1, y1, x2, y2) in lines {
        if !diagonals && x1 != x2 && y1 != y2 {
            continue;
        }
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let len = (x2 - x1).abs().max((y2 - y1).abs());
        for i in 0..=len {
            *covered.entry((x1 + i * dx, y1 + i * dy)).or_default() += 1;
        }
    }
    covered.values().filter(|&&n| n >= 2).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlaps(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    #[test]
    fn axis_aligned() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "5");
    }

    #[test]
    fn with_diagonals() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "12");
    }
}
