use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 21, tags = ["y2023", "grid", "search", "math"])]
pub struct Solver;

const STEPS: u64 = 64;
const FAR_STEPS: u64 = 26_501_365;

#[derive(Debug)]
pub struct Garden {
    rocks: Grid<bool>,
    start: Pos,
}

impl AocParser for Solver {
    type SharedData<'a> = Garden;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let raw = Grid::parse_bytes(input)?;
        let start = raw
            .find(|&b| b == b'S')
            .ok_or_else(|| ParseError::MissingData("no starting plot".into()))?;
        if let Some(bad) = raw.cells().iter().find(|b| !matches!(b, b'.' | b'#' | b'S')) {
            return Err(ParseError::InvalidFormat(format!("bad tile {:?}", *bad as char)));
        }
        Ok(Garden {
            rocks: raw.map(|&b| b == b'#'),
            start,
        })
    }
}

impl Garden {
    fn is_rock(&self, x: i64, y: i64, tiled: bool) -> bool {
        let (w, h) = (self.rocks.width() as i64, self.rocks.height() as i64);
        if tiled {
            self.rocks[(x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)]
        } else {
            self.rocks.get_signed(x, y).copied().unwrap_or(true)
        }
    }

    /// Plots the elf can stand on after exactly `steps` steps; with `tiled`
    /// the garden repeats forever in every direction
    pub fn reachable(&self, steps: u64, tiled: bool) -> u64 {
        let start = (self.start.0 as i64, self.start.1 as i64);
        let mut seen = HashSet::from([start]);
        let mut frontier = vec![start];
        // Plots reached at an even (index 0) or odd (index 1) step count
        let mut by_parity = [1, 0];
        for step in 1..=steps {
            let mut next = Vec::new();
            for (x, y) in frontier {
                for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                    if !self.is_rock(nx, ny, tiled) && seen.insert((nx, ny)) {
                        next.push((nx, ny));
                    }
                }
            }
            by_parity[(step % 2) as usize] += next.len() as u64;
            frontier = next;
        }
        by_parity[(steps % 2) as usize]
    }
}

/// Value at `k` of the quadratic through `(0, f[0])`, `(1, f[1])`, `(2, f[2])`
pub fn quadratic_at(f: [u64; 3], k: u64) -> u64 {
    let [a, b, c] = f.map(|v| v as i128);
    let k = k as i128;
    let first = b - a;
    let second = c - 2 * b + a;
    (a + k * first + k * (k - 1) / 2 * second) as u64
}

/// Reachable plots on the endless garden after `steps`, for gardens whose
/// start row and column are clear so the count grows quadratically per tile
pub fn reachable_far(garden: &Garden, steps: u64) -> Result<u64, SolveError> {
    let size = garden.rocks.width() as u64;
    if size != garden.rocks.height() as u64 {
        return Err(SolveError::failed("the garden is not square"));
    }
    let offset = steps % size;
    let samples = [0, 1, 2].map(|k| garden.reachable(offset + k * size, true));
    Ok(quadratic_at(samples, steps / size))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.reachable(STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(reachable_far(shared, FAR_STEPS)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

    #[test]
    fn bounded_garden() {
        let garden = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(garden.reachable(1, false), 2);
        assert_eq!(garden.reachable(3, false), 6);
        assert_eq!(garden.reachable(6, false), 16);
    }

    #[test]
    fn far_steps_follow_the_quadratic() {
        let open = Solver::parse(".....\n.....\n..S..\n.....\n.....\n").unwrap();
        for steps in [7, 12, 22, 23, 41] {
            let expected = open.reachable(steps, true);
            assert_eq!(reachable_far(&open, steps).unwrap(), expected);
            assert_eq!(expected, (steps + 1) * (steps + 1));
        }
        let wider = Solver::parse(".......\n.......\n.......\n...S...\n.......\n.......\n.......\n")
            .unwrap();
        assert_eq!(reachable_far(&wider, 31).unwrap(), wider.reachable(31, true));
    }

    #[test]
    fn far_steps_need_a_square_garden() {
        let garden = Solver::parse("...\n.S.\n...\n...\n").unwrap();
        assert!(reachable_far(&garden, 100).is_err());
    }

    #[test]
    fn endless_garden() {
        let garden = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(garden.reachable(10, true), 50);
        assert_eq!(garden.reachable(50, true), 1594);
        assert_eq!(garden.reachable(100, true), 6536);
    }

    #[test]
    fn quadratic_extrapolation() {
        // f(k) = 3k^2 + 2k + 7
        let f = |k: u64| 3 * k * k + 2 * k + 7;
        assert_eq!(quadratic_at([f(0), f(1), f(2)], 202_300), f(202_300));
    }
}
