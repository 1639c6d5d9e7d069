use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["y2023", "grid"])]
pub struct Solver;

/// A number on the schematic and the symbols touching it
#[derive(Debug)]
pub struct PartNumber {
    value: u32,
    symbols: Vec<(Pos, u8)>,
}

fn is_symbol(b: u8) -> bool {
    b != b'.' && !b.is_ascii_digit()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<PartNumber>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse_bytes(input)?;
        let mut numbers = Vec::new();
        for (y, row) in grid.rows().enumerate() {
            let mut x = 0;
            while x < row.len() {
                if !row[x].is_ascii_digit() {
                    x += 1;
                    continue;
                }
                let start = x;
                let mut value = 0u32;
                while x < row.len() && row[x].is_ascii_digit() {
                    value = value * 10 + u32::from(row[x] - b'0');
                    x += 1;
                }
                let mut symbols: Vec<(Pos, u8)> = (start..x)
                    .flat_map(|cx| grid.neighbors((cx, y)))
                    .filter(|&p| is_symbol(grid[p]))
                    .map(|p| (p, grid[p]))
                    .collect();
                symbols.sort_unstable();
                symbols.dedup();
                numbers.push(PartNumber { value, symbols });
            }
        }
        Ok(numbers)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|n| !n.symbols.is_empty())
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gears: HashMap<Pos, Vec<u32>> = HashMap::new();
        for number in shared.iter() {
            for &(pos, symbol) in &number.symbols {
                if symbol == b'*' {
                    gears.entry(pos).or_default().push(number.value);
                }
            }
        }
        let sum: u64 = gears
            .values()
            .filter(|parts| parts.len() == 2)
            .map(|parts| parts.iter().map(|&v| u64::from(v)).product::<u64>())
            .sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "4361");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "467835");
    }

    #[test]
    fn numbers_at_row_end() {
        let numbers = Solver::parse("..12\n.*..").unwrap();
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].value, 12);
        assert_eq!(numbers[0].symbols, vec![((1, 1), b'*')]);
    }
}
