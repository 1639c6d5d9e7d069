use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["y2021", "dp"])]
pub struct Solver;

const RESET: i64 = 7;
const NEWBORN: i64 = 9;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|s| match s.trim().parse() {
                Ok(timer) if (0..NEWBORN).contains(&timer) => Ok(timer),
                _ => Err(ParseError::InvalidFormat(format!("bad timer {:?}", s))),
            })
            .collect()
    }
}

/// Fish descended from (and including) one fish whose timer is at zero with
/// the given number of days left
struct Descendants;

impl DpProblem<i64, u64> for Descendants {
    fn deps(&self, days: &i64) -> Vec<i64> {
        if *days <= 0 {
            vec![]
        } else {
            vec![days - RESET, days - NEWBORN]
        }
    }

    fn compute(&self, days: &i64, deps: Vec<u64>) -> u64 {
        if *days <= 0 { 1 } else { deps.iter().sum() }
    }
}

pub fn population(timers: &[i64], days: i64) -> u64 {
    let cache = DpCache::with_problem(HashMapBackend::new(), Descendants);
    timers.iter().map(|&t| cache.get(&(days - t))).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 256).to_string())
    }
}
