//! Dense 2D grids parsed from puzzle text
//!
//! Positions are `(x, y)` with `x` the column and `y` the row, `y` growing
//! downwards, matching how puzzle maps are printed.

use std::fmt;
use std::ops::{Index, IndexMut};

use aoc_solver::ParseError;

pub type Pos = (usize, usize);

/// Compass direction on a printed map (north is up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    pub fn delta(self) -> (i64, i64) {
        match self {
            Dir::North => (0, -1),
            Dir::East => (1, 0),
            Dir::South => (0, 1),
            Dir::West => (-1, 0),
        }
    }

    pub fn turn_right(self) -> Dir {
        match self {
            Dir::North => Dir::East,
            Dir::East => Dir::South,
            Dir::South => Dir::West,
            Dir::West => Dir::North,
        }
    }

    pub fn turn_left(self) -> Dir {
        match self {
            Dir::North => Dir::West,
            Dir::West => Dir::South,
            Dir::South => Dir::East,
            Dir::East => Dir::North,
        }
    }

    pub fn opposite(self) -> Dir {
        self.turn_right().turn_right()
    }

    /// Parse `U`/`D`/`L`/`R` or `N`/`S`/`E`/`W` (or arrow glyphs)
    pub fn from_char(c: char) -> Option<Dir> {
        match c {
            'U' | 'N' | '^' => Some(Dir::North),
            'R' | 'E' | '>' => Some(Dir::East),
            'D' | 'S' | 'v' => Some(Dir::South),
            'L' | 'W' | '<' => Some(Dir::West),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl Grid<u8> {
    /// Parse a rectangular block of text, one byte per cell.
    pub fn parse_bytes(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, Ok)
    }
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Parse a rectangular block of text, converting each byte.
    ///
    /// Surrounding blank lines are ignored; ragged rows are an error.
    pub fn parse_with<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(u8) -> Result<T, ParseError>,
    {
        let lines: Vec<&str> = input
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let width = lines.first().map(|l| l.len()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::MissingData("empty grid".into()));
        }
        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(ParseError::InvalidFormat(format!(
                    "row {} has width {}, expected {}",
                    y + 1,
                    line.len(),
                    width
                )));
            }
            for b in line.bytes() {
                cells.push(cell(b)?);
            }
        }
        Ok(Self {
            width,
            height: lines.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, (x, y): Pos) -> Option<&T> {
        (x < self.width && y < self.height).then(|| &self.cells[y * self.width + x])
    }

    pub fn get_mut(&mut self, (x, y): Pos) -> Option<&mut T> {
        if x < self.width && y < self.height {
            Some(&mut self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Signed lookup, `None` outside the grid.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<&T> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get((x as usize, y as usize))
    }

    /// Move from `pos` by `delta`, if the result is still on the grid.
    pub fn step(&self, (x, y): Pos, (dx, dy): (i64, i64)) -> Option<Pos> {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        (nx >= 0 && ny >= 0 && (nx as usize) < self.width && (ny as usize) < self.height)
            .then_some((nx as usize, ny as usize))
    }

    pub fn step_dir(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        self.step(pos, dir.delta())
    }

    /// On-grid neighbours in order N, S, E, W.
    pub fn cardinal_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        [(0, -1), (0, 1), (1, 0), (-1, 0)]
            .into_iter()
            .filter_map(move |d| self.step(pos, d))
    }

    /// On-grid neighbours, all eight, clockwise from NW.
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        [
            (-1, -1),
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
        ]
        .into_iter()
        .filter_map(move |d| self.step(pos, d))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, v)| ((i % self.width, i / self.width), v))
    }

    pub fn find<P>(&self, mut predicate: P) -> Option<Pos>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|(_, v)| predicate(v)).map(|(p, _)| p)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> + '_ {
        (0..self.height).map(move |y| &self.cells[y * self.width + x])
    }

    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): Pos) -> &T {
        assert!(x < self.width && y < self.height, "({}, {}) is off the grid", x, y);
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (x, y): Pos) -> &mut T {
        assert!(x < self.width && y < self.height, "({}, {}) is off the grid", x, y);
        &mut self.cells[y * self.width + x]
    }
}

impl fmt::Display for Grid<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\n#.#\n...\n.##\n";

    #[test]
    fn parse_and_lookup() {
        let grid = Grid::parse_bytes(MAP).unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid[(0, 0)], b'#');
        assert_eq!(grid.get((2, 2)), Some(&b'#'));
        assert_eq!(grid.get((3, 0)), None);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.find(|&c| c == b'.'), Some((1, 0)));
        assert_eq!(grid.to_string(), "#.#\n...\n.##\n");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert!(Grid::parse_bytes("##\n#").is_err());
        assert!(Grid::parse_bytes("\n\n").is_err());
    }

    #[test]
    fn neighbour_orders() {
        let grid = Grid::new(3, 3, 0u8);
        let corner: Vec<_> = grid.cardinal_neighbors((0, 0)).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        let centre: Vec<_> = grid.neighbors((1, 1)).collect();
        assert_eq!(centre[0], (0, 0));
        assert_eq!(centre[3], (2, 1));
        assert_eq!(centre.len(), 8);
    }

    #[test]
    fn directions_turn_consistently() {
        for dir in Dir::ALL {
            assert_eq!(dir.turn_left().turn_right(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
        assert_eq!(Dir::from_char('v'), Some(Dir::South));
    }
}
