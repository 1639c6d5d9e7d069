use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::Grid;
use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 14, tags = ["y2022", "grid", "simulation"])]
pub struct Solver;

const SOURCE: (usize, usize) = (500, 0);

#[derive(Debug, Clone)]
pub struct Cave {
    rock: Grid<bool>,
    /// Lowest rock row
    floor: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Cave;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let paths: Vec<Vec<(usize, usize)>> = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| {
                let nums = extract_unsigned::<usize>(line);
                if nums.len() < 2 || nums.len() % 2 != 0 {
                    return Err(ParseError::InvalidFormat(format!("bad rock path {:?}", line)));
                }
                Ok(nums.chunks(2).map(|c| (c[0], c[1])).collect())
            })
            .collect::<Result<_, _>>()?;
        let floor = paths
            .iter()
            .flatten()
            .map(|&(_, y)| y)
            .max()
            .ok_or_else(|| ParseError::MissingData("no rock".into()))?;
        // Sand on the floor spreads at most `floor + 2` either side of the source
        let width = SOURCE.0 + floor + 3;
        let max_x = paths.iter().flatten().map(|&(x, _)| x).max().unwrap_or(0);
        let mut rock = Grid::new(width.max(max_x + 1), floor + 3, false);
        for path in &paths {
            for (&(x1, y1), &(x2, y2)) in path.iter().tuple_windows() {
                for x in x1.min(x2)..=x1.max(x2) {
                    for y in y1.min(y2)..=y1.max(y2) {
                        rock[(x, y)] = true;
                    }
                }
            }
        }
        Ok(Cave { rock, floor })
    }
}

/// Grains that come to rest; with `has_floor` an infinite floor sits two
/// below the lowest rock, otherwise sand falls into the abyss past it
pub fn pour(cave: &Cave, has_floor: bool) -> usize {
    let mut filled = cave.rock.clone();
    let bottom = cave.floor + 1;
    // Path of the falling grain, so the next one resumes where it left off
    let mut path = vec![SOURCE];
    let mut rested = 0;
    while let Some(&(x, y)) = path.last() {
        if y == bottom {
            if !has_floor {
                break;
            }
        } else if let Some(next) = [(x, y + 1), (x - 1, y + 1), (x + 1, y + 1)]
            .into_iter()
            .find(|&p| !filled[p])
        {
            path.push(next);
            continue;
        }
        filled[(x, y)] = true;
        rested += 1;
        path.pop();
    }
    rested
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pour(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    #[test]
    fn into_the_abyss() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "24");
    }

    #[test]
    fn onto_the_floor() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "93");
    }
}
