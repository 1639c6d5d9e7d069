use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 17, tags = ["y2015", "search"])]
pub struct Solver;

const EGGNOG_LITRES: u32 = 150;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|s| {
                s.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad container size {:?}", s)))
            })
            .collect()
    }
}

/// Number of container subsets filling exactly `target`, grouped by how many
/// containers each subset uses
pub fn fills_by_count(containers: &[u32], target: u32) -> Vec<u64> {
    let mut counts = vec![0u64; containers.len() + 1];
    for mask in 0u64..(1 << containers.len()) {
        let total: u32 = (0..containers.len())
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| containers[i])
            .sum();
        if total == target {
            counts[mask.count_ones() as usize] += 1;
        }
    }
    counts
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(fills_by_count(shared, EGGNOG_LITRES).iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fills_by_count(shared, EGGNOG_LITRES)
            .into_iter()
            .find(|&n| n > 0)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("no combination fits"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinations_for_25_litres() {
        let counts = fills_by_count(&[20, 15, 10, 5, 5], 25);
        assert_eq!(counts.iter().sum::<u64>(), 4);
        assert_eq!(counts[2], 3);
        assert_eq!(counts[1], 0);
    }
}
