use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["y2022", "grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(ParseError::InvalidFormat(format!("bad tree height {:?}", b as char)))
            }
        })
    }
}

/// Walks outwards from `pos` in `dir`: (trees seen, reached the edge unblocked)
fn look(forest: &Grid<u8>, pos: Pos, dir: Dir) -> (usize, bool) {
    let height = forest[pos];
    let mut seen = 0;
    let mut at = pos;
    while let Some(next) = forest.step_dir(at, dir) {
        seen += 1;
        if forest[next] >= height {
            return (seen, false);
        }
        at = next;
    }
    (seen, true)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let visible = shared
            .positions()
            .filter(|&p| Dir::ALL.iter().any(|&d| look(shared, p, d).1))
            .count();
        Ok(visible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .positions()
            .map(|p| Dir::ALL.iter().map(|&d| look(shared, p, d).0).product::<usize>())
            .max()
            .unwrap_or(0);
        Ok(best.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn visible_trees() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "21");
    }

    #[test]
    fn scenic_score() {
        let forest = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(look(&forest, (2, 3), Dir::North), (2, false));
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "8");
    }
}
