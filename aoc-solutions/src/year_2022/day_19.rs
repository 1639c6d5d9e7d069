use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;
use crate::utils::progress::Throttle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 19, tags = ["y2022", "search"])]
pub struct Solver;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    id: u32,
    /// Ore, clay and obsidian needed for each robot kind
    costs: [[u32; 3]; 4],
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Blueprint>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // A blueprint may be wrapped over several lines
        input
            .split("Blueprint")
            .filter(|chunk| !chunk.trim().is_empty())
            .map(|chunk| match extract_unsigned::<u32>(chunk).as_slice() {
                &[id, ore, clay, obs_ore, obs_clay, geode_ore, geode_obs] => Ok(Blueprint {
                    id,
                    costs: [
                        [ore, 0, 0],
                        [clay, 0, 0],
                        [obs_ore, obs_clay, 0],
                        [geode_ore, 0, geode_obs],
                    ],
                }),
                _ => Err(ParseError::InvalidFormat(format!(
                    "bad blueprint {:?}",
                    chunk.trim()
                ))),
            })
            .collect()
    }
}

struct Search<'b> {
    blueprint: &'b Blueprint,
    /// More robots of a kind than the largest cost in that material never help
    caps: [u32; 3],
    best: u32,
    throttle: Throttle,
}

impl Search<'_> {
    fn run(&mut self, left: u32, robots: [u32; 3], stock: [u32; 3], geodes: u32) {
        self.best = self.best.max(geodes);
        let best = self.best;
        self.throttle.tick(|| format!("{} minutes left, best {}", left, best));
        if geodes + left * left.saturating_sub(1) / 2 <= self.best {
            return;
        }
        for kind in [GEODE, OBSIDIAN, CLAY, ORE] {
            if kind != GEODE && robots[kind] >= self.caps[kind] {
                continue;
            }
            let Some(wait) = self.wait_for(kind, &robots, &stock) else {
                continue;
            };
            let elapsed = wait + 1;
            if elapsed >= left {
                continue;
            }
            let remaining = left - elapsed;
            let cost = self.blueprint.costs[kind];
            let stock: [u32; 3] = std::array::from_fn(|m| stock[m] + robots[m] * elapsed - cost[m]);
            if kind == GEODE {
                self.run(remaining, robots, stock, geodes + remaining);
            } else {
                let mut robots = robots;
                robots[kind] += 1;
                self.run(remaining, robots, stock, geodes);
            }
        }
    }

    /// Minutes until `kind` is affordable, if current robots can ever afford it
    fn wait_for(&self, kind: usize, robots: &[u32; 3], stock: &[u32; 3]) -> Option<u32> {
        let cost = &self.blueprint.costs[kind];
        (0..3).try_fold(0, |wait: u32, m| {
            if cost[m] <= stock[m] {
                Some(wait)
            } else if robots[m] == 0 {
                None
            } else {
                Some(wait.max((cost[m] - stock[m]).div_ceil(robots[m])))
            }
        })
    }
}

/// Most geodes `blueprint` can crack in `minutes`, starting with one ore robot
pub fn max_geodes(blueprint: &Blueprint, minutes: u32) -> u32 {
    let caps = std::array::from_fn(|m| blueprint.costs.iter().map(|c| c[m]).max().unwrap_or(0));
    let mut search = Search {
        blueprint,
        caps,
        best: 0,
        throttle: Throttle::new("blueprint states", 1_000_000),
    };
    search.run(minutes, [1, 0, 0], [0, 0, 0], 0);
    tracing::trace!(
        id = blueprint.id,
        minutes,
        geodes = search.best,
        states = search.throttle.count(),
        "blueprint searched"
    );
    search.best
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let quality: u32 = shared
            .iter()
            .map(|bp| bp.id * max_geodes(bp, 24))
            .sum();
        Ok(quality.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared
            .iter()
            .take(3)
            .map(|bp| u64::from(max_geodes(bp, 32)))
            .product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Blueprint 1:
  Each ore robot costs 4 ore.
  Each clay robot costs 2 ore.
  Each obsidian robot costs 3 ore and 14 clay.
  Each geode robot costs 2 ore and 7 obsidian.

Blueprint 2:
  Each ore robot costs 2 ore.
  Each clay robot costs 3 ore.
  Each obsidian robot costs 3 ore and 8 clay.
  Each geode robot costs 3 ore and 12 obsidian.
";

    #[test]
    fn wrapped_blueprints_parse() {
        let blueprints = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(blueprints.len(), 2);
        assert_eq!(blueprints[1].costs[OBSIDIAN], [3, 8, 0]);
    }

    #[test]
    fn geodes_in_24_minutes() {
        let blueprints = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(max_geodes(&blueprints[0], 24), 9);
        assert_eq!(max_geodes(&blueprints[1], 24), 12);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "33");
    }

    #[test]
    fn geodes_in_32_minutes() {
        let blueprints = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(max_geodes(&blueprints[0], 32), 56);
        assert_eq!(max_geodes(&blueprints[1], 32), 62);
    }
}
