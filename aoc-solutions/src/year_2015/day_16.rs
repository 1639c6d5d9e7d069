use std::cmp::Ordering;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 16, tags = ["y2015"])]
pub struct Solver;

/// What the analysis machine found on the gift
const TICKER: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

#[derive(Debug)]
pub struct Aunt<'a> {
    number: u32,
    things: Vec<(&'a str, u32)>,
}

fn parse_item(item: &str) -> anyhow::Result<(&str, u32)> {
    let (name, count) = item
        .split_once(": ")
        .ok_or_else(|| anyhow!("bad item {:?}", item))?;
    Ok((name.trim(), count.trim().parse().context("item count")?))
}

fn parse_aunt(line: &str) -> anyhow::Result<Aunt<'_>> {
    let (head, rest) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("missing ':' in {:?}", line))?;
    let number = head
        .trim()
        .strip_prefix("Sue ")
        .ok_or_else(|| anyhow!("expected 'Sue N' in {:?}", line))?
        .parse()
        .context("aunt number")?;
    let things = rest
        .split(", ")
        .map(parse_item)
        .collect::<anyhow::Result<_>>()?;
    Ok(Aunt { number, things })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Aunt<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(parse_aunt)
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Ordering the remembered count must have against the ticker reading
fn exact(_: &str) -> Ordering {
    Ordering::Equal
}

fn ranged(thing: &str) -> Ordering {
    match thing {
        "cats" | "trees" => Ordering::Greater,
        "pomeranians" | "goldfish" => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn find_aunt(aunts: &[Aunt<'_>], rule: fn(&str) -> Ordering) -> Result<u32, SolveError> {
    aunts
        .iter()
        .find(|aunt| {
            aunt.things.iter().all(|&(thing, count)| {
                TICKER
                    .iter()
                    .find(|(name, _)| *name == thing)
                    .is_some_and(|&(_, reading)| count.cmp(&reading) == rule(thing))
            })
        })
        .map(|aunt| aunt.number)
        .ok_or_else(|| SolveError::failed("no aunt matches"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_aunt(shared, exact)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(find_aunt(shared, ranged)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const AUNTS: &str = "\
Sue 1: goldfish: 6, trees: 9, akitas: 0
Sue 2: cats: 7, trees: 3, cars: 2
Sue 3: cats: 8, pomeranians: 2, trees: 4
Sue 4: children: 1, cars: 2, perfumes: 1
";

    #[test]
    fn exact_match() {
        assert_eq!(solve_example::<Solver>(AUNTS, 1), "2");
    }

    #[test]
    fn ranged_match() {
        assert_eq!(solve_example::<Solver>(AUNTS, 2), "3");
    }
}
