use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["y2022"])]
pub struct Solver;

/// Opponent column and own column, both as 0 (rock), 1 (paper), 2 (scissors)
pub type Round = (u8, u8);

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match line.trim().as_bytes() {
                &[them @ b'A'..=b'C', b' ', me @ b'X'..=b'Z'] => Ok((them - b'A', me - b'X')),
                _ => Err(ParseError::InvalidFormat(format!("bad round {:?}", line))),
            })
            .collect()
    }
}

/// Shape score plus 0/3/6 for loss/draw/win
fn score(them: u8, me: u8) -> u32 {
    let outcome = (me + 4 - them) % 3;
    (me as u32 + 1) + outcome as u32 * 3
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|&(them, me)| score(them, me)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Second column is the wanted outcome: lose, draw, win
        let total: u32 = shared
            .iter()
            .map(|&(them, outcome)| score(them, (them + outcome + 2) % 3))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "A Y\nB X\nC Z\n";

    #[test]
    fn shapes() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "15");
    }

    #[test]
    fn outcomes() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "12");
    }
}
