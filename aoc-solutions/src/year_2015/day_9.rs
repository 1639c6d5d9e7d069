use std::collections::HashMap;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["y2015", "search"])]
pub struct Solver;

/// Symmetric distance matrix between numbered places
#[derive(Debug)]
pub struct Distances {
    places: usize,
    table: Vec<u32>,
}

impl Distances {
    fn get(&self, a: usize, b: usize) -> u32 {
        self.table[a * self.places + b]
    }

    /// Lengths of the shortest and longest routes visiting every place once
    fn route_bounds(&self) -> Option<(u32, u32)> {
        let lengths = (0..self.places)
            .permutations(self.places)
            .map(|route| route.windows(2).map(|w| self.get(w[0], w[1])).sum::<u32>());
        match lengths.minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(x) => Some((x, x)),
            MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
        }
    }
}

fn parse_edge(line: &str) -> anyhow::Result<(&str, &str, u32)> {
    let (pair, dist) = line
        .split_once(" = ")
        .ok_or_else(|| anyhow!("missing distance in {:?}", line))?;
    let (a, b) = pair
        .split_once(" to ")
        .ok_or_else(|| anyhow!("missing 'to' in {:?}", line))?;
    Ok((a.trim(), b.trim(), dist.trim().parse().context("distance")?))
}

impl AocParser for Solver {
    type SharedData<'a> = Distances;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut edges = Vec::new();
        for line in input.lines().filter(|l| !l.trim().is_empty()) {
            let parsed = parse_edge(line).map_err(invalid_format)?;
            let next = index.len();
            let a = *index.entry(parsed.0).or_insert(next);
            let next = index.len();
            let b = *index.entry(parsed.1).or_insert(next);
            edges.push((a, b, parsed.2));
        }
        let places = index.len();
        let mut table = vec![0; places * places];
        for (a, b, d) in edges {
            table[a * places + b] = d;
            table[b * places + a] = d;
        }
        Ok(Distances { places, table })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (shortest, _) = shared
            .route_bounds()
            .ok_or_else(|| SolveError::failed("no places"))?;
        Ok(shortest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, longest) = shared
            .route_bounds()
            .ok_or_else(|| SolveError::failed("no places"))?;
        Ok(longest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
London to Dublin = 464
London to Belfast = 518
Dublin to Belfast = 141
";

    #[test]
    fn shortest_route() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "605");
    }

    #[test]
    fn longest_route() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "982");
    }
}
