use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["y2015", "grid"])]
pub struct Solver;

const SIDE: usize = 1000;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$")
        .expect("instruction pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| -> anyhow::Result<Instruction> {
                let caps = INSTRUCTION
                    .captures(line.trim())
                    .ok_or_else(|| anyhow!("unrecognised instruction {:?}", line))?;
                let action = match &caps[1] {
                    "turn on" => Action::On,
                    "turn off" => Action::Off,
                    _ => Action::Toggle,
                };
                let n = |i: usize| -> anyhow::Result<usize> {
                    let v: usize = caps[i].parse().context("coordinate")?;
                    anyhow::ensure!(v < SIDE, "coordinate {} is off the grid", v);
                    Ok(v)
                };
                Ok(Instruction {
                    action,
                    from: (n(2)?, n(3)?),
                    to: (n(4)?, n(5)?),
                })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Apply every instruction to a zeroed grid and sum the cell values
fn run<F>(instructions: &[Instruction], apply: F) -> u64
where
    F: Fn(Action, u32) -> u32,
{
    let mut lights = vec![0u32; SIDE * SIDE];
    for ins in instructions {
        for y in ins.from.1..=ins.to.1 {
            for cell in &mut lights[y * SIDE + ins.from.0..=y * SIDE + ins.to.0] {
                *cell = apply(ins.action, *cell);
            }
        }
    }
    lights.iter().map(|&v| v as u64).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = run(shared, |action, v| match action {
            Action::On => 1,
            Action::Off => 0,
            Action::Toggle => 1 - v,
        });
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = run(shared, |action, v| match action {
            Action::On => v + 1,
            Action::Off => v.saturating_sub(1),
            Action::Toggle => v + 2,
        });
        Ok(brightness.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn on_off_toggle() {
        assert_eq!(solve_example::<Solver>("turn on 0,0 through 999,999", 1), "1000000");
        let input = "turn on 0,0 through 999,999\ntoggle 0,0 through 999,0\nturn off 499,499 through 500,500";
        assert_eq!(solve_example::<Solver>(input, 1), "998996");
    }

    #[test]
    fn brightness() {
        assert_eq!(solve_example::<Solver>("turn on 0,0 through 0,0", 2), "1");
        assert_eq!(solve_example::<Solver>("toggle 0,0 through 999,999", 2), "2000000");
        assert_eq!(solve_example::<Solver>("turn off 0,0 through 9,9", 2), "0");
    }

    #[test]
    fn rejects_off_grid() {
        assert!(Solver::parse("turn on 0,0 through 1000,1").is_err());
    }
}
