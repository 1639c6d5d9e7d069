use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["y2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let (word, amount) = line
        .trim()
        .split_once(' ')
        .ok_or_else(|| anyhow!("bad command {:?}", line))?;
    let amount = amount.parse().with_context(|| format!("bad amount in {:?}", line))?;
    Ok(match word {
        "forward" => Command::Forward(amount),
        "down" => Command::Down(amount),
        "up" => Command::Up(amount),
        _ => bail!("unknown command {:?}", word),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_command)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (pos, depth) = shared.iter().fold((0, 0), |(pos, depth), cmd| match *cmd {
            Command::Forward(n) => (pos + n, depth),
            Command::Down(n) => (pos, depth + n),
            Command::Up(n) => (pos, depth - n),
        });
        Ok((pos * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (pos, depth, _) = shared
            .iter()
            .fold((0, 0, 0), |(pos, depth, aim), cmd| match *cmd {
                Command::Forward(n) => (pos + n, depth + aim * n, aim),
                Command::Down(n) => (pos, depth, aim + n),
                Command::Up(n) => (pos, depth, aim - n),
            });
        Ok((pos * depth).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

    #[test]
    fn plain_course() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "150");
    }

    #[test]
    fn course_with_aim() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "900");
    }
}
