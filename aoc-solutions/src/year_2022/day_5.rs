use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["y2022", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    count: usize,
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub struct Cargo {
    /// Bottom crate first
    stacks: Vec<Vec<u8>>,
    moves: Vec<Move>,
}

fn parse_cargo(input: &str) -> anyhow::Result<Cargo> {
    // Leading spaces in the drawing are significant
    let input = input.trim_start_matches('\n').replace("\r\n", "\n");
    let (drawing, moves) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected a drawing, a blank line, then moves"))?;
    let mut rows: Vec<&str> = drawing.lines().collect();
    let labels = rows.pop().ok_or_else(|| anyhow!("empty drawing"))?;
    let count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); count];
    for row in rows.iter().rev() {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.as_bytes().get(i * 4 + 1) {
                Some(&b) if b.is_ascii_uppercase() => stack.push(b),
                _ => {}
            }
        }
    }
    let moves = moves
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| match extract_unsigned::<usize>(line).as_slice() {
            &[count, from, to] if (1..=stacks.len()).contains(&from) && (1..=stacks.len()).contains(&to) => {
                Ok(Move {
                    count,
                    from: from - 1,
                    to: to - 1,
                })
            }
            _ => Err(anyhow!("bad move {:?}", line)),
        })
        .collect::<anyhow::Result<_>>()?;
    ensure!(!stacks.is_empty(), "no stacks");
    Ok(Cargo { stacks, moves })
}

impl AocParser for Solver {
    type SharedData<'a> = Cargo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_cargo(input).map_err(invalid_format)
    }
}

/// Crates on top of each stack after all moves
fn rearrange(cargo: &Cargo, keep_order: bool) -> Result<String, SolveError> {
    let mut stacks = cargo.stacks.clone();
    for m in &cargo.moves {
        let from = &mut stacks[m.from];
        if m.count > from.len() {
            return Err(SolveError::failed(format!(
                "cannot move {} crates from a stack of {}",
                m.count,
                from.len()
            )));
        }
        let mut lifted = from.split_off(from.len() - m.count);
        if !keep_order {
            lifted.reverse();
        }
        stacks[m.to].extend(lifted);
    }
    Ok(stacks
        .iter()
        .filter_map(|s| s.last().map(|&b| b as char))
        .collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearrange(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\n\
move 1 from 2 to 1\n\
move 3 from 1 to 3\n\
move 2 from 2 to 1\n\
move 1 from 1 to 2\n";

    #[test]
    fn crate_mover_9000() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "CMZ");
    }

    #[test]
    fn crate_mover_9001() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "MCD");
    }

    #[test]
    fn rejects_unknown_stack() {
        assert!(Solver::parse(&EXAMPLE.replace("to 3", "to 4")).is_err());
    }
}
