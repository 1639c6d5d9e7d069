use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["y2023", "dp"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Row {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Row {
    /// Five copies of the row, springs joined by `?`
    fn unfold(&self) -> Row {
        let mut springs = self.springs.clone();
        for _ in 1..5 {
            springs.push(b'?');
            springs.extend_from_slice(&self.springs);
        }
        Row {
            springs,
            groups: self.groups.repeat(5),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Row>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| -> anyhow::Result<Row> {
                let (springs, groups) = line
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("bad row {:?}", line))?;
                anyhow::ensure!(
                    springs.bytes().all(|b| matches!(b, b'.' | b'#' | b'?')),
                    "bad springs {:?}",
                    springs
                );
                let groups = groups
                    .split(',')
                    .map(str::parse)
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("groups in {:?}", line))?;
                Ok(Row {
                    springs: springs.as_bytes().to_vec(),
                    groups,
                })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Arrangements of `springs[i..]` holding exactly `groups[g..]`, indexed by `(i, g)`
struct Arrangements<'r> {
    row: &'r Row,
}

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(i, g): &(usize, usize)) -> Vec<(usize, usize)> {
        let Row { springs, groups } = self.row;
        let len = springs.len();
        let mut deps = Vec::with_capacity(2);
        if i >= len {
            return deps;
        }
        if springs[i] != b'#' {
            deps.push((i + 1, g));
        }
        if springs[i] != b'.' && g < groups.len() {
            let end = i + groups[g];
            let fits = end <= len
                && !springs[i..end].contains(&b'.')
                && springs.get(end) != Some(&b'#');
            if fits {
                deps.push(((end + 1).min(len), g + 1));
            }
        }
        deps
    }

    fn compute(&self, &(i, g): &(usize, usize), deps: Vec<u64>) -> u64 {
        if i >= self.row.springs.len() {
            u64::from(g == self.row.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

pub fn arrangements(row: &Row) -> u64 {
    let cache = DpCache::with_problem(HashMapBackend::new(), Arrangements { row });
    cache.get(&(0, 0))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(arrangements).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared.iter().map(|r| arrangements(&r.unfold())).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    #[test]
    fn per_row_counts() {
        let rows = Solver::parse(EXAMPLE).unwrap();
        let counts: Vec<u64> = rows.iter().map(arrangements).collect();
        assert_eq!(counts, vec![1, 4, 1, 1, 4, 10]);
        let unfolded: Vec<u64> = rows.iter().map(|r| arrangements(&r.unfold())).collect();
        assert_eq!(unfolded, vec![1, 16384, 1, 16, 2500, 506250]);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "21");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "525152");
    }
}
