use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["y2023", "grid"])]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    galaxies: Vec<(usize, usize)>,
    empty_cols: Vec<usize>,
    empty_rows: Vec<usize>,
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_with(input, |b| match b {
            b'#' => Ok(true),
            b'.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!("bad pixel {:?}", other as char))),
        })?;
        let galaxies = grid.iter().filter(|&(_, &g)| g).map(|(p, _)| p).collect();
        let empty_cols = (0..grid.width())
            .filter(|&x| grid.column(x).all(|&g| !g))
            .collect();
        let empty_rows = grid
            .rows()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|&g| !g))
            .map(|(y, _)| y)
            .collect();
        Ok(Image {
            galaxies,
            empty_cols,
            empty_rows,
        })
    }
}

/// Sum of distances between every pair of galaxies once each empty row and
/// column has grown to `factor` copies of itself
pub fn distance_sum(image: &Image, factor: u64) -> u64 {
    // Empty lines before `v`, found from the sorted list of empty lines
    let grow = |empty: &[usize], v: usize| {
        v as u64 + empty.partition_point(|&e| e < v) as u64 * (factor - 1)
    };
    let expanded: Vec<(u64, u64)> = image
        .galaxies
        .iter()
        .map(|&(x, y)| (grow(&image.empty_cols, x), grow(&image.empty_rows, y)))
        .collect();
    expanded
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distance_sum(shared, 1_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    #[test]
    fn expansion_factors() {
        let image = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(image.empty_cols, vec![2, 5, 8]);
        assert_eq!(image.empty_rows, vec![3, 7]);
        assert_eq!(distance_sum(&image, 2), 374);
        assert_eq!(distance_sum(&image, 10), 1030);
        assert_eq!(distance_sum(&image, 100), 8410);
    }
}
