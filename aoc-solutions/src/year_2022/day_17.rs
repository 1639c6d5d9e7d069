use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::progress::Throttle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 17, tags = ["y2022", "simulation", "cycle"])]
pub struct Solver;

/// Rock rows from the bottom up; bit `x` is column `x` before the two-column offset.
const ROCKS: [&[u8]; 5] = [
    &[0b1111],
    &[0b010, 0b111, 0b010],
    &[0b111, 0b100, 0b100],
    &[0b1, 0b1, 0b1, 0b1],
    &[0b11, 0b11],
];

const RIGHT_WALL: u8 = 1 << 6;

/// Rows near the top compared when looking for a repeating state
const PROFILE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Left,
    Right,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Push>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let jets = input
            .trim()
            .chars()
            .map(|c| match c {
                '<' => Ok(Push::Left),
                '>' => Ok(Push::Right),
                other => Err(ParseError::InvalidFormat(format!("bad jet {:?}", other))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if jets.is_empty() {
            return Err(ParseError::MissingData("no jets".into()));
        }
        Ok(jets)
    }
}

#[derive(Debug, Default)]
struct Chamber {
    rows: Vec<u8>,
    jet: usize,
}

impl Chamber {
    fn collides(&self, shape: &[u8], y: usize) -> bool {
        shape
            .iter()
            .enumerate()
            .any(|(i, row)| self.rows.get(y + i).is_some_and(|r| r & row != 0))
    }

    fn drop_rock(&mut self, rock: &[u8], jets: &[Push]) {
        let mut shape: Vec<u8> = rock.iter().map(|r| r << 2).collect();
        let mut y = self.rows.len() + 3;
        loop {
            let push = jets[self.jet];
            self.jet = (self.jet + 1) % jets.len();
            let shifted: Option<Vec<u8>> = match push {
                Push::Right if shape.iter().all(|r| r & RIGHT_WALL == 0) => {
                    Some(shape.iter().map(|r| r << 1).collect())
                }
                Push::Left if shape.iter().all(|r| r & 1 == 0) => {
                    Some(shape.iter().map(|r| r >> 1).collect())
                }
                _ => None,
            };
            if let Some(shifted) = shifted.filter(|s| !self.collides(s, y)) {
                shape = shifted;
            }
            if y == 0 || self.collides(&shape, y - 1) {
                break;
            }
            y -= 1;
        }
        for (i, row) in shape.into_iter().enumerate() {
            if y + i >= self.rows.len() {
                self.rows.resize(y + i + 1, 0);
            }
            self.rows[y + i] |= row;
        }
    }

    fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Tower height after `total` rocks, skipping ahead once the top of the
/// tower starts repeating
pub fn height_after(jets: &[Push], total: u64) -> u64 {
    let mut chamber = Chamber::default();
    let mut seen: HashMap<(usize, usize, Vec<u8>), (u64, usize)> = HashMap::new();
    let mut throttle = Throttle::new("rocks", 100_000);
    let mut skipped_height = 0;
    let mut dropped = 0;
    while dropped < total {
        let shape = (dropped % ROCKS.len() as u64) as usize;
        chamber.drop_rock(ROCKS[shape], jets);
        dropped += 1;
        throttle.tick(|| format!("tower height {}", chamber.height()));

        if skipped_height == 0 && chamber.height() >= PROFILE {
            let top = chamber.rows[chamber.height() - PROFILE..].to_vec();
            let key = (shape, chamber.jet, top);
            if let Some(&(then, height)) = seen.get(&key) {
                let period = dropped - then;
                let cycles = (total - dropped) / period;
                skipped_height = cycles * (chamber.height() - height) as u64;
                dropped += cycles * period;
                tracing::debug!(period, cycles, "tower repeats");
            } else {
                seen.insert(key, (dropped, chamber.height()));
            }
        }
    }
    chamber.height() as u64 + skipped_height
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(height_after(shared, 2022).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(height_after(shared, 1_000_000_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn first_rocks() {
        let jets = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(height_after(&jets, 1), 1);
        assert_eq!(height_after(&jets, 2), 4);
        assert_eq!(height_after(&jets, 3), 6);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "3068");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1514285714288");
    }
}
