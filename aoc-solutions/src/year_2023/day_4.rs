use std::collections::HashSet;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["y2023"])]
pub struct Solver;

impl AocParser for Solver {
    /// Winning numbers matched on each card
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| -> anyhow::Result<usize> {
                let (_, numbers) = line
                    .split_once(':')
                    .ok_or_else(|| anyhow!("missing ':' in {:?}", line))?;
                let (winning, have) = numbers
                    .split_once('|')
                    .ok_or_else(|| anyhow!("missing '|' in {:?}", line))?;
                let winning: HashSet<u32> = winning
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .context("winning numbers")?;
                let mut matches = 0;
                for n in have.split_whitespace() {
                    if winning.contains(&n.parse::<u32>().context("card numbers")?) {
                        matches += 1;
                    }
                }
                Ok(matches)
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Cards held once every won copy has been processed
pub fn total_cards(matches: &[usize]) -> usize {
    let mut copies = vec![1; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        for j in i + 1..(i + 1 + m).min(matches.len()) {
            copies[j] += copies[i];
        }
    }
    copies.iter().sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points: u32 = shared
            .iter()
            .filter(|&&m| m > 0)
            .map(|&m| 1u32 << (m - 1))
            .sum();
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_cards(shared).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn matches_per_card() {
        assert_eq!(Solver::parse(EXAMPLE).unwrap(), vec![4, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "13");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "30");
    }
}
