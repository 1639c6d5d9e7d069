use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 12, tags = ["y2022", "grid", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct Heightmap {
    heights: Grid<u8>,
    start: Pos,
    end: Pos,
}

impl AocParser for Solver {
    type SharedData<'a> = Heightmap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::parse_bytes(input)?;
        let start = raw
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("no start".into()))?;
        let end = raw
            .find(|&b| b == b'E')
            .ok_or_else(|| ParseError::MissingData("no end".into()))?;
        let heights = raw.map(|&b| match b {
            b'S' => 0,
            b'E' => 25,
            b => b.wrapping_sub(b'a'),
        });
        if let Some(bad) = heights.cells().iter().find(|&&h| h > 25) {
            return Err(ParseError::InvalidFormat(format!("bad height {}", bad)));
        }
        Ok(Heightmap { heights, start, end })
    }
}

/// Fewest steps from the end back to any square accepted by `is_goal`,
/// walking downhill at most one level per step
fn climb_down<F>(map: &Heightmap, is_goal: F) -> Option<usize>
where
    F: Fn(Pos) -> bool,
{
    let mut dist = map.heights.map(|_| None);
    dist[map.end] = Some(0);
    let mut queue = VecDeque::from([map.end]);
    while let Some(pos) = queue.pop_front() {
        let d = dist[pos]?;
        if is_goal(pos) {
            return Some(d);
        }
        for next in map.heights.cardinal_neighbors(pos) {
            if dist[next].is_none() && map.heights[pos] <= map.heights[next] + 1 {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        climb_down(shared, |p| p == shared.start)
            .map(|d| d.to_string())
            .ok_or_else(|| SolveError::failed("no route to the start"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        climb_down(shared, |p| shared.heights[p] == 0)
            .map(|d| d.to_string())
            .ok_or_else(|| SolveError::failed("no route to low ground"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi\n";

    #[test]
    fn from_start() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "31");
    }

    #[test]
    fn from_any_lowest_square() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "29");
    }
}
