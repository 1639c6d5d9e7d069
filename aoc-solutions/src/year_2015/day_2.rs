use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["y2015"])]
pub struct Solver;

/// Box dimensions, sorted ascending
#[derive(Debug, Clone, Copy)]
pub struct Present([u64; 3]);

impl Present {
    fn paper(&self) -> u64 {
        let [a, b, c] = self.0;
        2 * (a * b + b * c + a * c) + a * b
    }

    fn ribbon(&self) -> u64 {
        let [a, b, c] = self.0;
        2 * (a + b) + a * b * c
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Present>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(i, line)| -> anyhow::Result<Present> {
                let dims: Vec<u64> = line
                    .trim()
                    .split('x')
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("line {}", i + 1))?;
                let mut dims: [u64; 3] = dims
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("line {}: expected LxWxH", i + 1))?;
                dims.sort_unstable();
                Ok(Present(dims))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Present::paper).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Present::ribbon).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn wrapping_paper() {
        assert_eq!(solve_example::<Solver>("2x3x4", 1), "58");
        assert_eq!(solve_example::<Solver>("1x1x10", 1), "43");
        assert_eq!(solve_example::<Solver>("2x3x4\n1x1x10\n", 1), "101");
    }

    #[test]
    fn ribbon() {
        assert_eq!(solve_example::<Solver>("2x3x4", 2), "34");
        assert_eq!(solve_example::<Solver>("1x1x10", 2), "14");
    }

    #[test]
    fn bad_dimensions() {
        assert!(Solver::parse("2x3").is_err());
        assert!(Solver::parse("2xax4").is_err());
    }
}
