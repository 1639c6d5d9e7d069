use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 10, tags = ["y2022", "vm"])]
pub struct Solver;

const SCREEN_WIDTH: usize = 40;
const SCREEN_HEIGHT: usize = 6;

impl AocParser for Solver {
    /// Value of X during each cycle, starting with cycle 1
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut x = 1;
        let mut during = Vec::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if line == "noop" {
                during.push(x);
            } else if let Some(v) = line.strip_prefix("addx ") {
                let v: i64 = v
                    .parse()
                    .with_context(|| format!("bad addx operand in {:?}", line))
                    .map_err(invalid_format)?;
                during.extend([x, x]);
                x += v;
            } else {
                return Err(invalid_format(anyhow!("unknown instruction {:?}", line)));
            }
        }
        Ok(during)
    }
}

pub fn signal_strength(during: &[i64]) -> i64 {
    (20..=during.len())
        .step_by(40)
        .map(|cycle| cycle as i64 * during[cycle - 1])
        .sum()
}

/// Lit pixels as `#`, one line per screen row
pub fn render(during: &[i64]) -> String {
    (0..SCREEN_HEIGHT)
        .map(|row| {
            (0..SCREEN_WIDTH)
                .map(|col| {
                    let lit = during
                        .get(row * SCREEN_WIDTH + col)
                        .is_some_and(|&x| (x - col as i64).abs() <= 1);
                    if lit { '#' } else { '.' }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(signal_strength(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(render(shared))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn register_during_cycles() {
        let during = Solver::parse("noop\naddx 3\naddx -5\n").unwrap();
        assert_eq!(during, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn strengths() {
        let idle = "noop\n".repeat(220);
        assert_eq!(solve_example::<Solver>(&idle, 1), "720");
        let shifted = format!("addx 5\n{}", "noop\n".repeat(218));
        assert_eq!(solve_example::<Solver>(&shifted, 1), "4320");
    }

    #[test]
    fn screen() {
        let idle = "noop\n".repeat(240);
        let row = format!("###{}", ".".repeat(37));
        let expected = vec![row; 6].join("\n");
        assert_eq!(solve_example::<Solver>(&idle, 2), expected);
    }
}
