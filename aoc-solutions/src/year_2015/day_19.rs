use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 19, tags = ["y2015", "strings"])]
pub struct Solver;

const MAX_SHUFFLES: usize = 1000;

#[derive(Debug)]
pub struct Machine<'a> {
    replacements: Vec<(&'a str, &'a str)>,
    molecule: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = Machine<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Machine<'a>> {
            let (rules, molecule) = input
                .trim()
                .split_once("\n\n")
                .ok_or_else(|| anyhow!("expected replacements, a blank line, then the molecule"))?;
            let replacements = rules
                .lines()
                .map(|line| {
                    line.split_once(" => ")
                        .map(|(from, to)| (from.trim(), to.trim()))
                        .ok_or_else(|| anyhow!("bad replacement {:?}", line))
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Machine {
                replacements,
                molecule: molecule.trim(),
            })
        };
        parse().map_err(invalid_format)
    }
}

/// Distinct molecules reachable with one replacement
pub fn calibrate(machine: &Machine<'_>) -> usize {
    let mut seen = HashSet::new();
    for &(from, to) in &machine.replacements {
        for (i, _) in machine.molecule.match_indices(from) {
            let mut next = String::with_capacity(machine.molecule.len() + to.len());
            next.push_str(&machine.molecule[..i]);
            next.push_str(to);
            next.push_str(&machine.molecule[i + from.len()..]);
            seen.insert(next);
        }
    }
    seen.len()
}

/// Small xorshift generator so the reduction order is reproducible
struct Shuffler(u64);

impl Shuffler {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next() % (i as u64 + 1)) as usize;
            items.swap(i, j);
        }
    }
}

/// Steps to build the molecule from `e`, found by greedily reducing the
/// molecule back to `e` and reshuffling the rule order when stuck
pub fn fewest_steps(machine: &Machine<'_>) -> Option<usize> {
    let (seeds, mut rules): (Vec<_>, Vec<_>) = machine
        .replacements
        .iter()
        .copied()
        .partition(|(from, _)| *from == "e");
    rules.sort_by_key(|(_, to)| std::cmp::Reverse(to.len()));
    let mut shuffler = Shuffler(0x2015_1219);

    for attempt in 0..MAX_SHUFFLES {
        let mut molecule = machine.molecule.to_string();
        let mut steps = 0;
        loop {
            if seeds.iter().any(|(_, to)| *to == molecule) {
                return Some(steps + 1);
            }
            let Some(&(from, to)) = rules.iter().find(|(_, to)| molecule.contains(to)) else {
                break;
            };
            steps += molecule.matches(to).count();
            molecule = molecule.replace(to, from);
        }
        tracing::trace!(attempt, steps, "reduction stuck, reshuffling");
        shuffler.shuffle(&mut rules);
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibrate(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_steps(shared)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("could not reduce the molecule to e"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const CALIBRATION: &str = "\
H => HO
H => OH
O => HH

HOH
";

    const FABRICATION: &str = "\
e => H
e => O
H => HO
H => OH
O => HH

HOHOHO
";

    #[test]
    fn distinct_molecules() {
        assert_eq!(solve_example::<Solver>(CALIBRATION, 1), "4");
        assert_eq!(
            solve_example::<Solver>(&CALIBRATION.replace("HOH\n", "HOHOHO\n"), 1),
            "7"
        );
    }

    #[test]
    fn fabrication_steps() {
        assert_eq!(solve_example::<Solver>(FABRICATION, 2), "6");
        assert_eq!(
            solve_example::<Solver>(&FABRICATION.replace("HOHOHO", "HOH"), 2),
            "3"
        );
    }
}
