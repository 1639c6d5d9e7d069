use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["y2021", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(ParseError::InvalidFormat(format!("bad height {:?}", b as char)))
            }
        })
    }
}

fn low_points(map: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    map.positions()
        .filter(|&p| map.cardinal_neighbors(p).all(|n| map[n] > map[p]))
}

/// Flood fill up to the height-9 walls
fn basin_size(map: &Grid<u8>, low: Pos) -> usize {
    let mut seen = map.map(|_| false);
    let mut stack = vec![low];
    seen[low] = true;
    let mut size = 0;
    while let Some(p) = stack.pop() {
        size += 1;
        for n in map.cardinal_neighbors(p) {
            if !seen[n] && map[n] != 9 {
                seen[n] = true;
                stack.push(n);
            }
        }
    }
    size
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u32 = low_points(shared).map(|p| shared[p] as u32 + 1).sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut sizes: Vec<usize> = low_points(shared).map(|p| basin_size(shared, p)).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes.iter().take(3).product::<usize>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678
";

    #[test]
    fn risk_of_low_points() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "15");
    }

    #[test]
    fn largest_basins() {
        let map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(basin_size(&map, (1, 0)), 3);
        assert_eq!(basin_size(&map, (9, 0)), 9);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1134");
    }
}
