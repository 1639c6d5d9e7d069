use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["y2023", "grid", "search"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'.' | b'/' | b'\\' | b'|' | b'-' => Ok(b),
            other => Err(ParseError::InvalidFormat(format!("bad tile {:?}", other as char))),
        })
    }
}

/// Directions a beam leaves `tile` in when it arrives heading `dir`
fn deflect(tile: u8, dir: Dir) -> ([Dir; 2], usize) {
    match (tile, dir) {
        (b'/', Dir::East) | (b'\\', Dir::West) => ([Dir::North; 2], 1),
        (b'/', Dir::West) | (b'\\', Dir::East) => ([Dir::South; 2], 1),
        (b'/', Dir::North) | (b'\\', Dir::South) => ([Dir::East; 2], 1),
        (b'/', Dir::South) | (b'\\', Dir::North) => ([Dir::West; 2], 1),
        (b'|', Dir::East | Dir::West) => ([Dir::North, Dir::South], 2),
        (b'-', Dir::North | Dir::South) => ([Dir::East, Dir::West], 2),
        _ => ([dir; 2], 1),
    }
}

/// Tiles energized by a beam entering at `start` heading `dir`
pub fn energized(contraption: &Grid<u8>, start: Pos, dir: Dir) -> usize {
    // One flag per direction a beam has crossed each tile in
    let mut seen = contraption.map(|_| [false; 4]);
    let mut beams = vec![(start, dir)];
    while let Some((pos, dir)) = beams.pop() {
        if std::mem::replace(&mut seen[pos][dir.index()], true) {
            continue;
        }
        let (outs, n) = deflect(contraption[pos], dir);
        for &out in &outs[..n] {
            if let Some(next) = contraption.step_dir(pos, out) {
                beams.push((next, out));
            }
        }
    }
    seen.cells().iter().filter(|s| s.iter().any(|&b| b)).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(energized(shared, (0, 0), Dir::East).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (w, h) = (shared.width(), shared.height());
        let edges = (0..w)
            .flat_map(|x| [((x, 0), Dir::South), ((x, h - 1), Dir::North)])
            .chain((0..h).flat_map(|y| [((0, y), Dir::East), ((w - 1, y), Dir::West)]));
        let best = edges
            .map(|(pos, dir)| energized(shared, pos, dir))
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = r"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "46");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "51");
    }

    #[test]
    fn splitter_sends_both_ways() {
        let grid = Solver::parse("...\n.|.\n...").unwrap();
        assert_eq!(energized(&grid, (0, 1), Dir::East), 4);
    }
}
