use std::collections::HashMap;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 13, tags = ["y2015", "search"])]
pub struct Solver;

/// Happiness change for each (guest, neighbour) pair
#[derive(Debug, Clone)]
pub struct Preferences {
    guests: usize,
    delta: Vec<i64>,
}

impl Preferences {
    fn pair(&self, a: usize, b: usize) -> i64 {
        self.delta[a * self.guests + b] + self.delta[b * self.guests + a]
    }

    /// Copy with one extra guest who is indifferent to everyone
    fn with_host(&self) -> Preferences {
        let n = self.guests + 1;
        let mut delta = vec![0; n * n];
        for a in 0..self.guests {
            for b in 0..self.guests {
                delta[a * n + b] = self.delta[a * self.guests + b];
            }
        }
        Preferences { guests: n, delta }
    }

    /// Best total around a round table; guest 0 is fixed to skip rotations
    fn best_seating(&self) -> i64 {
        if self.guests < 2 {
            return 0;
        }
        (1..self.guests)
            .permutations(self.guests - 1)
            .map(|rest| {
                let table: Vec<usize> = std::iter::once(0).chain(rest).collect();
                (0..table.len())
                    .map(|i| self.pair(table[i], table[(i + 1) % table.len()]))
                    .sum::<i64>()
            })
            .max()
            .unwrap_or(0)
    }
}

fn parse_line(line: &str) -> anyhow::Result<(&str, &str, i64)> {
    let words: Vec<&str> = line.trim().trim_end_matches('.').split_whitespace().collect();
    match words.as_slice() {
        [who, "would", sign, amount, "happiness", "units", "by", "sitting", "next", "to", other] => {
            let amount: i64 = amount.parse().context("happiness amount")?;
            let amount = match *sign {
                "gain" => amount,
                "lose" => -amount,
                _ => return Err(anyhow!("expected gain or lose, got {:?}", sign)),
            };
            Ok((*who, *other, amount))
        }
        _ => Err(anyhow!("unrecognised line {:?}", line)),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Preferences;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rules: Vec<(&str, &str, i64)> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_line)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)?;
        let mut index: HashMap<&str, usize> = HashMap::new();
        for (who, other, _) in &rules {
            for name in [*who, *other] {
                let next = index.len();
                index.entry(name).or_insert(next);
            }
        }
        let guests = index.len();
        let mut delta = vec![0; guests * guests];
        for (who, other, amount) in rules {
            delta[index[who] * guests + index[other]] = amount;
        }
        Ok(Preferences { guests, delta })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best_seating().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.with_host().best_seating().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Alice would gain 54 happiness units by sitting next to Bob.
Alice would lose 79 happiness units by sitting next to Carol.
Alice would lose 2 happiness units by sitting next to David.
Bob would gain 83 happiness units by sitting next to Alice.
Bob would lose 7 happiness units by sitting next to Carol.
Bob would lose 63 happiness units by sitting next to David.
Carol would lose 62 happiness units by sitting next to Alice.
Carol would gain 60 happiness units by sitting next to Bob.
Carol would gain 55 happiness units by sitting next to David.
David would gain 46 happiness units by sitting next to Alice.
David would lose 7 happiness units by sitting next to Bob.
David would gain 41 happiness units by sitting next to Carol.
";

    #[test]
    fn optimal_seating() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "330");
    }

    #[test]
    fn seating_with_indifferent_host() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "286");
    }
}
