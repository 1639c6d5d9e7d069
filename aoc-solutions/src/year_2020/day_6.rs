use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 6, tags = ["y2020"])]
pub struct Solver;

/// Each group as one bit set of answered questions per person
pub type Group = Vec<u32>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Group>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split("\n\n")
            .filter(|g| !g.trim().is_empty())
            .map(|group| {
                group
                    .split_whitespace()
                    .map(|person| {
                        person.bytes().try_fold(0u32, |set, b| {
                            if b.is_ascii_lowercase() {
                                Ok(set | 1 << (b - b'a'))
                            } else {
                                Err(ParseError::InvalidFormat(format!("bad answer {:?}", b as char)))
                            }
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|g| g.iter().fold(0, |acc, p| acc | p).count_ones())
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|g| g.iter().fold(u32::MAX, |acc, p| acc & p).count_ones())
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb\n";

    #[test]
    fn anyone_answered() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "11");
    }

    #[test]
    fn everyone_answered() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "6");
    }
}
