use std::collections::HashMap;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::lcm;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["y2023", "graph", "cycle"])]
pub struct Solver;

#[derive(Debug)]
pub struct Map<'a> {
    /// `true` for a left turn
    turns: Vec<bool>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Map<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_map(input).map_err(invalid_format)
    }
}

fn parse_map(input: &str) -> anyhow::Result<Map<'_>> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
    let turns = lines
        .next()
        .ok_or_else(|| anyhow!("no instructions"))?
        .chars()
        .map(|c| match c {
            'L' => Ok(true),
            'R' => Ok(false),
            other => Err(anyhow!("bad turn {:?}", other)),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    anyhow::ensure!(!turns.is_empty(), "no instructions");
    let nodes = lines.map(parse_node).collect::<anyhow::Result<_>>()?;
    Ok(Map { turns, nodes })
}

fn parse_node(line: &str) -> anyhow::Result<(&str, (&str, &str))> {
    let (name, exits) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("bad node {:?}", line))?;
    let (left, right) = exits
        .trim_matches(['(', ')'])
        .split_once(", ")
        .ok_or_else(|| anyhow!("bad exits {:?}", exits))?;
    Ok((name, (left, right)))
}

impl Map<'_> {
    /// Steps from `start` until `done` accepts the node reached
    fn steps<F>(&self, start: &str, done: F) -> Result<u64, SolveError>
    where
        F: Fn(&str) -> bool,
    {
        let mut at = start;
        let limit = self.turns.len() * self.nodes.len().max(1) + 1;
        for (steps, &left) in self.turns.iter().cycle().take(limit).enumerate() {
            if done(at) && steps > 0 {
                return Ok(steps as u64);
            }
            let &(l, r) = self
                .nodes
                .get(at)
                .ok_or_else(|| SolveError::failed(format!("no node {}", at)))?;
            at = if left { l } else { r };
        }
        Err(SolveError::failed(format!("{} never arrives", start)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.steps("AAA", |n| n == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Every ghost loops back to its first Z node on a fixed period
        let mut period = 1;
        for &start in shared.nodes.keys().filter(|n| n.ends_with('A')) {
            period = lcm(period, shared.steps(start, |n| n.ends_with('Z'))?);
        }
        Ok(period.to_string())
    }
}
