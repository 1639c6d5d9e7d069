use std::collections::{HashMap, VecDeque};
use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 16, tags = ["y2022", "graph", "search"])]
pub struct Solver;

static VALVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)$")
        .expect("valve pattern is valid")
});

const START: &str = "AA";

/// Valves worth opening, plus the start, with walking times between them
#[derive(Debug)]
pub struct Network {
    flows: Vec<u32>,
    dist: Vec<Vec<u32>>,
    start: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Network;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        build_network(input).map_err(invalid_format)
    }
}

fn build_network(input: &str) -> anyhow::Result<Network> {
    let mut names = Vec::new();
    let mut rates = Vec::new();
    let mut links = Vec::new();
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let caps = VALVE
            .captures(line)
            .ok_or_else(|| anyhow!("unrecognised valve {:?}", line))?;
        names.push(caps.get(1).map_or("", |m| m.as_str()));
        rates.push(caps[2].parse::<u32>().context("flow rate")?);
        links.push(caps.get(3).map_or("", |m| m.as_str()));
    }
    let index: HashMap<&str, usize> = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    let adjacency = links
        .iter()
        .map(|list| {
            list.split(", ")
                .map(|n| index.get(n).copied().ok_or_else(|| anyhow!("unknown valve {}", n)))
                .collect::<anyhow::Result<Vec<_>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let start = *index
        .get(START)
        .ok_or_else(|| anyhow!("no valve {}", START))?;

    // Keep the start first, then every valve with a non-zero rate
    let mut kept = vec![start];
    kept.extend((0..names.len()).filter(|&i| rates[i] > 0 && i != start));
    anyhow::ensure!(kept.len() <= 64, "too many working valves: {}", kept.len() - 1);

    let dist = kept
        .iter()
        .map(|&from| {
            let hops = bfs(&adjacency, from);
            kept.iter().map(|&to| hops[to]).collect()
        })
        .collect();
    Ok(Network {
        flows: kept.iter().map(|&i| rates[i]).collect(),
        dist,
        start: 0,
    })
}

fn bfs(adjacency: &[Vec<usize>], from: usize) -> Vec<u32> {
    let mut hops = vec![u32::MAX; adjacency.len()];
    hops[from] = 0;
    let mut queue = VecDeque::from([from]);
    while let Some(at) = queue.pop_front() {
        for &next in &adjacency[at] {
            if hops[next] == u32::MAX {
                hops[next] = hops[at] + 1;
                queue.push_back(next);
            }
        }
    }
    hops
}

/// Best pressure released for every set of valves that can be opened in time
pub fn best_per_set(net: &Network, minutes: u32) -> HashMap<u64, u32> {
    let mut best = HashMap::new();
    explore(net, net.start, minutes, 1, 0, &mut best);
    best
}

fn explore(net: &Network, at: usize, left: u32, opened: u64, released: u32, best: &mut HashMap<u64, u32>) {
    let entry = best.entry(opened & !1).or_insert(0);
    *entry = (*entry).max(released);
    for next in 0..net.flows.len() {
        if opened & (1 << next) != 0 {
            continue;
        }
        let cost = net.dist[at][next].saturating_add(1);
        if cost < left {
            let remaining = left - cost;
            explore(
                net,
                next,
                remaining,
                opened | (1 << next),
                released + net.flows[next] * remaining,
                best,
            );
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = best_per_set(shared, 30);
        Ok(best.values().max().copied().unwrap_or(0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sets: Vec<(u64, u32)> = best_per_set(shared, 26).into_iter().collect();
        sets.sort_unstable_by(|a, b| b.1.cmp(&a.1));
        let mut total = 0;
        for (i, &(mine, a)) in sets.iter().enumerate() {
            if a * 2 <= total {
                break;
            }
            for &(theirs, b) in &sets[i..] {
                if a + b <= total {
                    break;
                }
                if mine & theirs == 0 {
                    total = a + b;
                }
            }
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

    #[test]
    fn only_working_valves_are_kept() {
        let net = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(net.flows, vec![0, 13, 2, 20, 3, 22, 21]);
        assert_eq!(net.dist[0][5], 5);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "1651");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1707");
    }
}
