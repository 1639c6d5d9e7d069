use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 15, tags = ["y2021", "grid", "search"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'1'..=b'9' => Ok(b - b'0'),
            _ => Err(ParseError::InvalidFormat(format!("bad risk {:?}", b as char))),
        })
    }
}

/// The cave repeated `times` in each direction, risk rising by one per tile
/// and wrapping from 9 back to 1
fn tiled(cave: &Grid<u8>, times: usize) -> Grid<u8> {
    let (w, h) = (cave.width(), cave.height());
    let mut big = Grid::new(w * times, h * times, 0u8);
    for (x, y) in big.positions() {
        let bump = (x / w + y / h) as u8;
        big[(x, y)] = (cave[(x % w, y % h)] + bump - 1) % 9 + 1;
    }
    big
}

/// Dijkstra from the top-left to the bottom-right corner
pub fn lowest_risk(cave: &Grid<u8>) -> Option<u32> {
    let goal = (cave.width() - 1, cave.height() - 1);
    let mut best = cave.map(|_| u32::MAX);
    let mut queue = BinaryHeap::from([Reverse((0u32, (0usize, 0usize)))]);
    best[(0, 0)] = 0;
    while let Some(Reverse((risk, pos))) = queue.pop() {
        if pos == goal {
            return Some(risk);
        }
        if risk > best[pos] {
            continue;
        }
        for next in cave.cardinal_neighbors(pos) {
            let total = risk + cave[next] as u32;
            if total < best[next] {
                best[next] = total;
                queue.push(Reverse((total, next)));
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(shared)
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::failed("no path"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(&tiled(shared, 5))
            .map(|r| r.to_string())
            .ok_or_else(|| SolveError::failed("no path"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    #[test]
    fn single_tile() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "40");
    }

    #[test]
    fn five_by_five_tiles() {
        let cave = Solver::parse(EXAMPLE).unwrap();
        let big = tiled(&cave, 5);
        assert_eq!((big.width(), big.height()), (50, 50));
        assert_eq!(big[(49, 49)], 9);
        assert_eq!(big[(10, 0)], 2);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "315");
    }
}
