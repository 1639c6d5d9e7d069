use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};
use crate::utils::progress::Throttle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["y2023", "grid", "dijkstra"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |b| match b {
            b'1'..=b'9' => Ok(u32::from(b - b'0')),
            other => Err(ParseError::InvalidFormat(format!("bad heat loss {:?}", other as char))),
        })
    }
}

/// Directions along each axis; index 0 moves horizontally, 1 vertically
const AXES: [[Dir; 2]; 2] = [[Dir::East, Dir::West], [Dir::South, Dir::North]];

/// Least heat lost from the top-left to the bottom-right block when the
/// crucible must move between `min` and `max` blocks before each turn
pub fn least_heat_loss(city: &Grid<u32>, min: usize, max: usize) -> Option<u32> {
    let goal: Pos = (city.width() - 1, city.height() - 1);
    let mut best = city.map(|_| [u32::MAX; 2]);
    let mut queue = BinaryHeap::new();
    // The first move may go along either axis
    for axis in 0..2 {
        best[(0, 0)][axis] = 0;
        queue.push(Reverse((0, (0, 0), axis)));
    }
    let mut throttle = Throttle::new("crucible states", 100_000);
    while let Some(Reverse((loss, pos, axis))) = queue.pop() {
        throttle.tick(|| format!("heat loss {} at {:?}", loss, pos));
        if pos == goal {
            return Some(loss);
        }
        if loss > best[pos][axis] {
            continue;
        }
        // Arriving along `axis` means the next run is along the other one
        let turn = 1 - axis;
        for dir in AXES[turn] {
            let mut at = pos;
            let mut total = loss;
            for run in 1..=max {
                let Some(next) = city.step_dir(at, dir) else {
                    break;
                };
                at = next;
                total += city[at];
                if run >= min && total < best[at][turn] {
                    best[at][turn] = total;
                    queue.push(Reverse((total, at, turn)));
                }
            }
        }
    }
    None
}

fn solve_with(city: &Grid<u32>, min: usize, max: usize) -> Result<String, SolveError> {
    least_heat_loss(city, min, max)
        .map(|loss| loss.to_string())
        .ok_or_else(|| SolveError::failed("the factory cannot be reached"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 1, 3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 4, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "102");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "94");
    }

    #[test]
    fn ultra_crucible_must_run_four_blocks() {
        let city = Solver::parse("111111111111\n999999999991\n999999999991\n999999999991\n999999999991\n")
            .unwrap();
        assert_eq!(least_heat_loss(&city, 4, 10), Some(71));
    }
}
