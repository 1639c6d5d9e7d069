use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::interior_points;
use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["y2023", "grid", "geometry"])]
pub struct Solver;

fn exits(tile: u8) -> Option<[Dir; 2]> {
    match tile {
        b'|' => Some([Dir::North, Dir::South]),
        b'-' => Some([Dir::East, Dir::West]),
        b'L' => Some([Dir::North, Dir::East]),
        b'J' => Some([Dir::North, Dir::West]),
        b'7' => Some([Dir::South, Dir::West]),
        b'F' => Some([Dir::South, Dir::East]),
        _ => None,
    }
}

impl AocParser for Solver {
    /// The main loop, one entry per tile in walking order, starting at `S`
    type SharedData<'a> = Vec<Pos>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = Grid::parse_bytes(input)?;
        let start = maze
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("no start tile".into()))?;
        trace_loop(&maze, start)
            .ok_or_else(|| ParseError::InvalidFormat("start is not on a closed loop".into()))
    }
}

fn connects(maze: &Grid<u8>, pos: Pos, dir: Dir) -> bool {
    maze.step_dir(pos, dir)
        .and_then(|next| exits(maze[next]))
        .is_some_and(|e| e.contains(&dir.opposite()))
}

fn trace_loop(maze: &Grid<u8>, start: Pos) -> Option<Vec<Pos>> {
    let mut dir = Dir::ALL.into_iter().find(|&d| connects(maze, start, d))?;
    let mut tiles = vec![start];
    let mut pos = maze.step_dir(start, dir)?;
    while pos != start {
        tiles.push(pos);
        let [a, b] = exits(maze[pos])?;
        dir = if a == dir.opposite() { b } else { a };
        if !connects(maze, pos, dir) && maze.step_dir(pos, dir) != Some(start) {
            return None;
        }
        pos = maze.step_dir(pos, dir)?;
    }
    Some(tiles)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((shared.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let vertices: Vec<(i64, i64)> = shared.iter().map(|&(x, y)| (x as i64, y as i64)).collect();
        Ok(interior_points(&vertices).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn farthest_tile() {
        let example = "7-F7-\n.FJ|7\nSJLL7\n|F--J\nLJ.LJ\n";
        assert_eq!(solve_example::<Solver>(example, 1), "8");
    }

    #[test]
    fn enclosed_tiles() {
        let example = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";
        assert_eq!(solve_example::<Solver>(example, 2), "8");
    }

    #[test]
    fn broken_loop_is_rejected() {
        assert!(Solver::parse("S-.\n|..\nL-J").is_err());
    }
}
