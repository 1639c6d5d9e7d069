use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 23, tags = ["y2022", "simulation", "cellular"])]
pub struct Solver;

type Elf = (i32, i32);

/// Cells that must be empty for each proposal, then the move itself
const PROPOSALS: [([Elf; 3], Elf); 4] = [
    ([(-1, -1), (0, -1), (1, -1)], (0, -1)),
    ([(-1, 1), (0, 1), (1, 1)], (0, 1)),
    ([(-1, -1), (-1, 0), (-1, 1)], (-1, 0)),
    ([(1, -1), (1, 0), (1, 1)], (1, 0)),
];

const AROUND: [Elf; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

fn offset((x, y): Elf, (dx, dy): Elf) -> Elf {
    (x + dx, y + dy)
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Elf>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, |b| match b {
            b'#' => Ok(true),
            b'.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!("bad tile {:?}", other as char))),
        })?;
        Ok(grid
            .iter()
            .filter(|&(_, &elf)| elf)
            .map(|((x, y), _)| (x as i32, y as i32))
            .collect())
    }
}

/// Run one round starting with proposal `first`; `false` if nobody moved
pub fn round(elves: &mut HashSet<Elf>, first: usize) -> bool {
    let mut targets: HashMap<Elf, Vec<Elf>> = HashMap::new();
    for &elf in elves.iter() {
        if AROUND.iter().all(|&d| !elves.contains(&offset(elf, d))) {
            continue;
        }
        let proposal = (0..4)
            .map(|k| PROPOSALS[(first + k) % 4])
            .find(|(checks, _)| checks.iter().all(|&d| !elves.contains(&offset(elf, d))));
        if let Some((_, step)) = proposal {
            targets.entry(offset(elf, step)).or_default().push(elf);
        }
    }
    let mut moved = false;
    for (target, from) in targets {
        if let [elf] = from[..] {
            elves.remove(&elf);
            elves.insert(target);
            moved = true;
        }
    }
    moved
}

/// Empty ground tiles in the smallest rectangle holding every elf
pub fn empty_ground(elves: &HashSet<Elf>) -> usize {
    let (Some(min_x), Some(max_x)) = (elves.iter().map(|e| e.0).min(), elves.iter().map(|e| e.0).max())
    else {
        return 0;
    };
    let (min_y, max_y) = elves
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), e| (lo.min(e.1), hi.max(e.1)));
    let area = (max_x - min_x + 1) as usize * (max_y - min_y + 1) as usize;
    area - elves.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        for r in 0..10 {
            round(&mut elves, r % 4);
        }
        Ok(empty_ground(&elves).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut elves = shared.clone();
        let mut r = 0;
        while round(&mut elves, r % 4) {
            r += 1;
        }
        Ok((r + 1).to_string())
    }
}
