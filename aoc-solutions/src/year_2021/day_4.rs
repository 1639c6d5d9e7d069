use anyhow::{anyhow, ensure, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["y2021", "simulation"])]
pub struct Solver;

const SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Board {
    numbers: [u32; SIZE * SIZE],
    marked: [bool; SIZE * SIZE],
}

impl Board {
    /// Mark `n`; true if this completed a row or column
    fn mark(&mut self, n: u32) -> bool {
        let Some(i) = self.numbers.iter().position(|&v| v == n) else {
            return false;
        };
        self.marked[i] = true;
        let (row, col) = (i / SIZE, i % SIZE);
        (0..SIZE).all(|c| self.marked[row * SIZE + c]) || (0..SIZE).all(|r| self.marked[r * SIZE + col])
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(self.marked)
            .filter(|(_, m)| !m)
            .map(|(n, _)| n)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub struct Bingo {
    draws: Vec<u32>,
    boards: Vec<Board>,
}

impl AocParser for Solver {
    type SharedData<'a> = Bingo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Bingo> {
            let mut blocks = input.trim().split("\n\n");
            let draws = blocks
                .next()
                .ok_or_else(|| anyhow!("missing draw order"))?
                .split(',')
                .map(|n| n.trim().parse().context("draw"))
                .collect::<anyhow::Result<_>>()?;
            let boards = blocks
                .map(|block| -> anyhow::Result<Board> {
                    let cells: Vec<u32> = block
                        .split_whitespace()
                        .map(|n| n.parse().context("board number"))
                        .collect::<anyhow::Result<_>>()?;
                    ensure!(cells.len() == SIZE * SIZE, "board has {} numbers", cells.len());
                    let mut numbers = [0; SIZE * SIZE];
                    numbers.copy_from_slice(&cells);
                    Ok(Board {
                        numbers,
                        marked: [false; SIZE * SIZE],
                    })
                })
                .collect::<anyhow::Result<_>>()?;
            Ok(Bingo { draws, boards })
        };
        parse().map_err(invalid_format)
    }
}

/// Scores of boards in the order they win
fn winning_scores(game: &Bingo) -> Vec<u32> {
    let mut boards = game.boards.clone();
    let mut won = vec![false; boards.len()];
    let mut scores = Vec::new();
    for &n in &game.draws {
        for (board, done) in boards.iter_mut().zip(won.iter_mut()) {
            if !*done && board.mark(n) {
                *done = true;
                scores.push(board.unmarked_sum() * n);
            }
        }
    }
    scores
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .first()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .last()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::failed("no board wins"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn first_winner() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "4512");
    }

    #[test]
    fn last_winner() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1924");
    }
}
