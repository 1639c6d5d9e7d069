use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 3, tags = ["y2020", "grid"])]
pub struct Solver;

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'#' => Ok(true),
            b'.' => Ok(false),
            other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other as char))),
        })
    }
}

/// Trees hit on the way down; the map repeats to the right
pub fn trees_on_slope(map: &Grid<bool>, (right, down): (usize, usize)) -> usize {
    (0..map.height())
        .step_by(down)
        .enumerate()
        .filter(|&(step, y)| map[((step * right) % map.width(), y)])
        .count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(trees_on_slope(shared, (3, 1)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = SLOPES.iter().map(|&s| trees_on_slope(shared, s)).product();
        Ok(product.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

    #[test]
    fn single_slope() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "7");
        let map = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(trees_on_slope(&map, (1, 2)), 2);
    }

    #[test]
    fn slope_product() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "336");
    }
}
