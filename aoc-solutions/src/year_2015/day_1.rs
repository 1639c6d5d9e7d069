use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["y2015"])]
pub struct Solver;

impl AocParser for Solver {
    /// Floor change per instruction
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '(' => Ok(1),
                ')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected character {:?}",
                    other
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|i| (i + 1).to_string())
            .ok_or_else(|| SolveError::failed("Santa never reaches the basement"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn final_floor() {
        assert_eq!(solve_example::<Solver>("(())", 1), "0");
        assert_eq!(solve_example::<Solver>("))(((((", 1), "3");
        assert_eq!(solve_example::<Solver>(")())())", 1), "-3");
    }

    #[test]
    fn first_basement_position() {
        assert_eq!(solve_example::<Solver>(")", 2), "1");
        assert_eq!(solve_example::<Solver>("()())", 2), "5");
    }

    #[test]
    fn rejects_other_characters() {
        assert!(Solver::parse("(x)").is_err());
    }
}
