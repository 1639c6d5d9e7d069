use std::sync::LazyLock;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 2, tags = ["y2020", "strings"])]
pub struct Solver;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)-(\d+) ([a-z]): ([a-z]*)$").expect("password entry pattern is valid")
});

#[derive(Debug)]
pub struct Entry<'a> {
    low: usize,
    high: usize,
    letter: u8,
    password: &'a str,
}

impl Entry<'_> {
    fn count_policy(&self) -> bool {
        let n = self.password.bytes().filter(|&b| b == self.letter).count();
        (self.low..=self.high).contains(&n)
    }

    fn position_policy(&self) -> bool {
        let at = |pos: usize| self.password.as_bytes().get(pos - 1) == Some(&self.letter);
        at(self.low) != at(self.high)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| -> anyhow::Result<Entry<'a>> {
                let caps = ENTRY
                    .captures(line)
                    .ok_or_else(|| anyhow!("bad entry {:?}", line))?;
                let low: usize = caps[1].parse()?;
                let high: usize = caps[2].parse()?;
                anyhow::ensure!(low >= 1 && low <= high, "bad policy range in {:?}", line);
                Ok(Entry {
                    low,
                    high,
                    letter: caps[3].as_bytes()[0],
                    password: caps.get(4).map_or("", |m| m.as_str()),
                })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.count_policy()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|e| e.position_policy()).count().to_string())
    }
}
