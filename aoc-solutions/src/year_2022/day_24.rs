use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;
use crate::utils::numbers::lcm;
use crate::utils::progress::Throttle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 24, tags = ["y2022", "search", "grid"])]
pub struct Solver;

type Spot = (i64, i64);

const MOVES: [Spot; 5] = [(0, 0), (1, 0), (0, 1), (-1, 0), (0, -1)];

/// The valley floor without its walls, with the gaps in the top and bottom
/// walls expressed in floor coordinates
#[derive(Debug)]
pub struct Valley {
    floor: Grid<u8>,
    entrance: Spot,
    exit: Spot,
}

impl AocParser for Solver {
    type SharedData<'a> = Valley;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let full = Grid::parse_bytes(input)?;
        if full.width() < 3 || full.height() < 3 {
            return Err(ParseError::InvalidFormat("valley too small".into()));
        }
        let gap = |row: usize| -> Result<i64, ParseError> {
            (0..full.width())
                .find(|&x| full[(x, row)] == b'.')
                .map(|x| x as i64 - 1)
                .ok_or_else(|| ParseError::MissingData(format!("no gap in wall row {}", row)))
        };
        let entrance = (gap(0)?, -1);
        let exit = (gap(full.height() - 1)?, full.height() as i64 - 2);
        let mut floor = Grid::new(full.width() - 2, full.height() - 2, b'.');
        for pos in floor.positions() {
            let b = full[(pos.0 + 1, pos.1 + 1)];
            if !matches!(b, b'.' | b'<' | b'>' | b'^' | b'v') {
                return Err(ParseError::InvalidFormat(format!("bad tile {:?}", b as char)));
            }
            floor[pos] = b;
        }
        Ok(Valley { floor, entrance, exit })
    }
}

impl Valley {
    fn width(&self) -> i64 {
        self.floor.width() as i64
    }

    fn height(&self) -> i64 {
        self.floor.height() as i64
    }

    /// Whether `(x, y)` on the floor is free of blizzards at minute `t`
    fn clear(&self, (x, y): Spot, t: i64) -> bool {
        let (w, h) = (self.width(), self.height());
        let at = |x: i64, y: i64| self.floor[(x.rem_euclid(w) as usize, y.rem_euclid(h) as usize)];
        at(x - t, y) != b'>' && at(x + t, y) != b'<' && at(x, y - t) != b'v' && at(x, y + t) != b'^'
    }

    fn on_floor(&self, (x, y): Spot) -> bool {
        (0..self.width()).contains(&x) && (0..self.height()).contains(&y)
    }

    /// Minute of arrival at `to` when leaving `from` at minute `start`
    pub fn crossing(&self, from: Spot, to: Spot, start: i64) -> Option<i64> {
        let period = lcm(self.floor.width() as u64, self.floor.height() as u64) as i64;
        let give_up = start + period * self.width() * self.height() + period;
        let mut frontier = HashSet::from([from]);
        let mut t = start;
        let mut throttle = Throttle::new("blizzard minutes", 100);
        while t < give_up {
            t += 1;
            throttle.tick(|| format!("minute {}: {} positions", t, frontier.len()));
            let mut next = HashSet::with_capacity(frontier.len() * 2);
            for &(x, y) in &frontier {
                for (dx, dy) in MOVES {
                    let spot = (x + dx, y + dy);
                    if spot == to {
                        return Some(t);
                    }
                    if spot == from || (self.on_floor(spot) && self.clear(spot, t)) {
                        next.insert(spot);
                    }
                }
            }
            frontier = next;
        }
        None
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .crossing(shared.entrance, shared.exit, 0)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("the exit cannot be reached"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (a, b) = (shared.entrance, shared.exit);
        let there = shared.crossing(a, b, 0);
        let back = there.and_then(|t| shared.crossing(b, a, t));
        back.and_then(|t| shared.crossing(a, b, t))
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("the trip cannot be completed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";

    #[test]
    fn blizzards_wrap_around() {
        let valley = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(valley.entrance, (0, -1));
        assert_eq!(valley.exit, (5, 4));
        assert!(!valley.clear((0, 0), 0));
        assert!(valley.clear((2, 0), 0));
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "18");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "54");
    }
}
