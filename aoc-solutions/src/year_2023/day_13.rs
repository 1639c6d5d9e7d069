use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["y2023", "grid"])]
pub struct Solver;

/// A pattern as bitmasks, one per row and one per column
#[derive(Debug)]
pub struct Pattern {
    rows: Vec<u64>,
    cols: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Pattern>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| -> Result<Pattern, ParseError> {
                let grid = Grid::parse_with(block, |b| match b {
                    b'#' => Ok(true),
                    b'.' => Ok(false),
                    other => Err(ParseError::InvalidFormat(format!("bad tile {:?}", other as char))),
                })?;
                if grid.width() > 64 || grid.height() > 64 {
                    return Err(ParseError::InvalidFormat("pattern wider than 64".into()));
                }
                Ok(Pattern {
                    rows: grid.rows().map(|r| mask(r.iter())).collect(),
                    cols: (0..grid.width()).map(|x| mask(grid.column(x))).collect(),
                })
            })
            .collect()
    }
}

fn mask<'a>(cells: impl Iterator<Item = &'a bool>) -> u64 {
    cells.fold(0, |acc, &rock| acc << 1 | u64::from(rock))
}

/// Lines above (or left of) a mirror where exactly `smudges` cells disagree
fn mirror(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&k| {
        let above = lines[..k].iter().rev();
        let below = lines[k..].iter();
        above.zip(below).map(|(a, b)| (a ^ b).count_ones()).sum::<u32>() == smudges
    })
}

pub fn summarize(pattern: &Pattern, smudges: u32) -> Option<usize> {
    mirror(&pattern.cols, smudges).or_else(|| mirror(&pattern.rows, smudges).map(|r| r * 100))
}

fn notes(patterns: &[Pattern], smudges: u32) -> Result<String, SolveError> {
    let mut total = 0;
    for (i, pattern) in patterns.iter().enumerate() {
        total += summarize(pattern, smudges)
            .ok_or_else(|| SolveError::failed(format!("pattern {} has no mirror", i + 1)))?;
    }
    Ok(total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        notes(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        notes(shared, 1)
    }
}
