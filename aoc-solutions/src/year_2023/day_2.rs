use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["y2023"])]
pub struct Solver;

/// Red, green and blue cubes
type Cubes = [u32; 3];

const BAG: Cubes = [12, 13, 14];

#[derive(Debug, Clone)]
pub struct Game {
    id: u32,
    draws: Vec<Cubes>,
}

impl Game {
    /// Fewest cubes of each colour that make every draw possible
    fn fewest(&self) -> Cubes {
        self.draws.iter().fold([0; 3], |acc, d| {
            [acc[0].max(d[0]), acc[1].max(d[1]), acc[2].max(d[2])]
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(parse_game)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let (head, draws) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ':' in {:?}", line))?;
    let id = head
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("bad game header {:?}", head))?
        .parse()
        .context("game id")?;
    let draws = draws
        .split("; ")
        .map(|draw| -> anyhow::Result<Cubes> {
            let mut cubes = [0; 3];
            for part in draw.split(", ") {
                let (n, colour) = part
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("bad cube count {:?}", part))?;
                let slot = match colour {
                    "red" => 0,
                    "green" => 1,
                    "blue" => 2,
                    other => bail!("unknown colour {:?}", other),
                };
                cubes[slot] += n.parse::<u32>().context("cube count")?;
            }
            Ok(cubes)
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, draws })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|g| g.fewest().iter().zip(BAG).all(|(&need, have)| need <= have))
            .map(|g| g.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared.iter().map(|g| g.fewest().iter().product::<u32>()).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "8");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "2286");
    }

    #[test]
    fn unknown_colour_is_rejected() {
        assert!(Solver::parse("Game 1: 3 purple").is_err());
    }
}
