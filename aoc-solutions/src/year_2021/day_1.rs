use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["y2021"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|s| {
                s.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad depth {:?}", s)))
            })
            .collect()
    }
}

/// Increases between sliding-window sums; the shared middle of two adjacent
/// windows cancels, so only the ends need comparing
fn increases(depths: &[u32], window: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(window))
        .filter(|(a, b)| b > a)
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(increases(shared, 3).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn single_measurements() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "7");
    }

    #[test]
    fn three_measurement_windows() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "5");
    }
}
