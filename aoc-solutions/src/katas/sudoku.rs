//! Brute-force sudoku: fill the first empty cell with every legal digit and
//! search depth first.

use std::fmt;

pub const CELLS: usize = 81;
const EMPTY: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameBoard {
    cells: [u8; CELLS],
}

impl GameBoard {
    /// Cells in row-major order, `0` for empty.
    pub fn new(cells: [u8; CELLS]) -> Self {
        Self { cells }
    }

    /// Parse 81 digits (`0` or `.` for empty); whitespace is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: Vec<u8> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' => Some(EMPTY),
                c => c.to_digit(10).map(|d| d as u8),
            })
            .collect::<Option<_>>()?;
        let cells: [u8; CELLS] = digits.try_into().ok()?;
        Some(Self::new(cells))
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn is_solved(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// Boards with the first empty cell set to each legal digit, ascending.
    pub fn next_moves(&self) -> Vec<GameBoard> {
        let Some(pos) = self.cells.iter().position(|&c| c == EMPTY) else {
            return Vec::new();
        };
        (1..=9)
            .filter(|&digit| self.is_legal(pos, digit))
            .map(|digit| {
                let mut next = *self;
                next.cells[pos] = digit;
                next
            })
            .collect()
    }

    fn is_legal(&self, pos: usize, digit: u8) -> bool {
        let (row, col) = (pos / 9, pos % 9);
        let (box_row, box_col) = (row / 3 * 3, col / 3 * 3);
        let in_row = (0..9).any(|c| self.cells[row * 9 + c] == digit);
        let in_col = (0..9).any(|r| self.cells[r * 9 + col] == digit);
        let in_box = (0..9).any(|i| self.cells[(box_row + i / 3) * 9 + box_col + i % 3] == digit);
        !(in_row || in_col || in_box)
    }

    /// The first full board reachable by legal moves, if any.
    pub fn solve(&self) -> Option<GameBoard> {
        let mut stack = vec![*self];
        while let Some(board) = stack.pop() {
            if board.is_solved() {
                return Some(board);
            }
            // Reversed so the smallest digit is tried first
            stack.extend(board.next_moves().into_iter().rev());
        }
        None
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(9) {
            let line: String = row
                .iter()
                .map(|&c| if c == EMPTY { '.' } else { (b'0' + c) as char })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "
        008342900
        009000700
        400000003
        006473200
        030000010
        002851600
        700000008
        004000100
        003697500";

    const SOLVED: &str = "
        678342951
        329185764
        451769823
        516473289
        837926415
        942851637
        765214398
        294538176
        183697542";

    #[test]
    fn next_moves_fill_first_empty_cell() {
        let board = GameBoard::parse(PUZZLE).unwrap();
        let firsts: Vec<u8> = board.next_moves().iter().map(|b| b.cells()[0]).collect();
        assert_eq!(firsts, vec![1, 5, 6]);

        let second = board.next_moves()[0].next_moves();
        let seconds: Vec<u8> = second.iter().map(|b| b.cells()[1]).collect();
        assert_eq!(seconds, vec![5, 6, 7]);
    }

    #[test]
    fn solves_puzzle() {
        let board = GameBoard::parse(PUZZLE).unwrap();
        assert_eq!(board.solve(), GameBoard::parse(SOLVED));
    }

    #[test]
    fn rejects_short_input() {
        assert!(GameBoard::parse("123").is_none());
    }

    #[test]
    fn display_marks_empty_cells() {
        let board = GameBoard::parse(PUZZLE).unwrap();
        assert!(board.to_string().starts_with("..83429..\n"));
    }
}
