use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["y2021", "math"])]
pub struct Solver;

impl AocParser for Solver {
    /// Crab positions, sorted
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut crabs = input
            .trim()
            .split(',')
            .map(|s| {
                s.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad position {:?}", s)))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if crabs.is_empty() {
            return Err(ParseError::MissingData("no crabs".into()));
        }
        crabs.sort_unstable();
        Ok(crabs)
    }
}

fn cheapest<F>(crabs: &[i64], cost: F) -> i64
where
    F: Fn(i64) -> i64,
{
    let (lo, hi) = (crabs[0], crabs[crabs.len() - 1]);
    (lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum())
        .min()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Linear cost is minimised at the median
        let median = shared[shared.len() / 2];
        let fuel: i64 = shared.iter().map(|&c| (c - median).abs()).sum();
        Ok(fuel.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(cheapest(shared, |d| d * (d + 1) / 2).to_string())
    }
}
