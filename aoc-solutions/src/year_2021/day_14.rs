use std::collections::HashMap;

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 14, tags = ["y2021", "strings"])]
pub struct Solver;

#[derive(Debug)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<(u8, u8), u8>,
}

fn parse_polymer(input: &str) -> anyhow::Result<Polymer> {
    let (template, rules) = input
        .trim()
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected a template, a blank line, then rules"))?;
    let template = template.trim().as_bytes().to_vec();
    ensure!(!template.is_empty(), "empty template");
    let rules = rules
        .lines()
        .map(|line| match line.trim().as_bytes() {
            &[a, b, b' ', b'-', b'>', b' ', c] => Ok(((a, b), c)),
            _ => Err(anyhow!("bad rule {:?}", line)),
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Polymer { template, rules })
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_polymer(input).map_err(invalid_format)
    }
}

/// Most minus least common element after `steps` insertions, tracking pair
/// counts instead of the string
pub fn spread_after(polymer: &Polymer, steps: usize) -> u64 {
    let mut pairs: HashMap<(u8, u8), u64> = HashMap::new();
    for (&a, &b) in polymer.template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }
    for _ in 0..steps {
        let mut next = HashMap::new();
        for (&(a, b), &n) in &pairs {
            match polymer.rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }
    // Every element is the first of a pair except the last one of the template
    let mut counts: HashMap<u8, u64> = HashMap::new();
    for (&(a, _), &n) in &pairs {
        *counts.entry(a).or_default() += n;
    }
    if let Some(&last) = polymer.template.last() {
        *counts.entry(last).or_default() += 1;
    }
    match counts.values().minmax() {
        MinMaxResult::MinMax(lo, hi) => hi - lo,
        _ => 0,
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(shared, 10).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(spread_after(shared, 40).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    #[test]
    fn ten_steps() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "1588");
    }

    #[test]
    fn forty_steps() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "2188189693529");
    }
}
