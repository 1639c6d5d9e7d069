use std::collections::{HashMap, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 22, tags = ["y2022", "grid", "3d"])]
pub struct Solver;

const VOID: u8 = b' ';
const WALL: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward(u32),
    Left,
    Right,
}

#[derive(Debug)]
pub struct Notes {
    map: Grid<u8>,
    path: Vec<Step>,
}

impl AocParser for Solver {
    type SharedData<'a> = Notes;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // Leading spaces on the first map row are significant
        let input = input.trim_start_matches(['\n', '\r']);
        let mut lines = input.lines().map(|l| l.trim_end_matches('\r'));
        let rows: Vec<&str> = lines.by_ref().take_while(|l| !l.trim().is_empty()).collect();
        let description = lines
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| ParseError::MissingData("no path description".into()))?;

        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if width == 0 {
            return Err(ParseError::MissingData("empty map".into()));
        }
        let mut map = Grid::new(width, rows.len(), VOID);
        for (y, row) in rows.iter().enumerate() {
            for (x, b) in row.bytes().enumerate() {
                if !matches!(b, b'.' | b'#' | b' ') {
                    return Err(ParseError::InvalidFormat(format!("bad tile {:?}", b as char)));
                }
                map[(x, y)] = b;
            }
        }
        Ok(Notes {
            map,
            path: parse_path(description.trim())?,
        })
    }
}

fn parse_path(description: &str) -> Result<Vec<Step>, ParseError> {
    let mut path = Vec::new();
    let mut count: Option<u32> = None;
    for c in description.chars() {
        if let Some(d) = c.to_digit(10) {
            count = Some(count.unwrap_or(0) * 10 + d);
            continue;
        }
        if let Some(n) = count.take() {
            path.push(Step::Forward(n));
        }
        path.push(match c {
            'L' => Step::Left,
            'R' => Step::Right,
            other => return Err(ParseError::InvalidFormat(format!("bad turn {:?}", other))),
        });
    }
    path.extend(count.map(Step::Forward));
    Ok(path)
}

fn facing_value(dir: Dir) -> usize {
    match dir {
        Dir::East => 0,
        Dir::South => 1,
        Dir::West => 2,
        Dir::North => 3,
    }
}

/// One step on the map, `None` when it leads off the board
fn step_on(map: &Grid<u8>, pos: Pos, dir: Dir) -> Option<Pos> {
    map.step_dir(pos, dir).filter(|&p| map[p] != VOID)
}

/// Follow the path, using `wrap` whenever a step leaves the board.
/// Returns the final password.
fn walk<W>(notes: &Notes, wrap: W) -> Result<usize, SolveError>
where
    W: Fn(Pos, Dir) -> Option<(Pos, Dir)>,
{
    let map = &notes.map;
    let start_x = map
        .rows()
        .next()
        .and_then(|row| row.iter().position(|&b| b == b'.'))
        .ok_or_else(|| SolveError::failed("no open tile on the top row"))?;
    let mut pos = (start_x, 0);
    let mut dir = Dir::East;
    for step in &notes.path {
        match *step {
            Step::Left => dir = dir.turn_left(),
            Step::Right => dir = dir.turn_right(),
            Step::Forward(n) => {
                for _ in 0..n {
                    let (next, next_dir) = match step_on(map, pos, dir) {
                        Some(next) => (next, dir),
                        None => wrap(pos, dir)
                            .ok_or_else(|| SolveError::failed(format!("cannot wrap from {:?}", pos)))?,
                    };
                    if map[next] == WALL {
                        break;
                    }
                    pos = next;
                    dir = next_dir;
                }
            }
        }
    }
    Ok(1000 * (pos.1 + 1) + 4 * (pos.0 + 1) + facing_value(dir))
}

/// Wrap to the far side of the same row or column
fn wrap_flat(map: &Grid<u8>, pos: Pos, dir: Dir) -> Option<(Pos, Dir)> {
    let back = dir.opposite();
    let mut far = pos;
    while let Some(p) = step_on(map, far, back) {
        far = p;
    }
    Some((far, dir))
}

type V3 = [i32; 3];

fn neg(v: V3) -> V3 {
    [-v[0], -v[1], -v[2]]
}

/// A face of the folded cube: where it sits on the map and how its map axes
/// lie in space
#[derive(Debug, Clone, Copy)]
struct Face {
    origin: Pos,
    right: V3,
    down: V3,
    normal: V3,
}

impl Face {
    fn axis(&self, dir: Dir) -> V3 {
        match dir {
            Dir::East => self.right,
            Dir::South => self.down,
            Dir::West => neg(self.right),
            Dir::North => neg(self.down),
        }
    }

    /// The frame of the face adjacent on the map in direction `dir`, after folding
    fn fold(&self, dir: Dir, origin: Pos) -> Face {
        let Face { right, down, normal, .. } = *self;
        let (right, down, normal) = match dir {
            Dir::East => (neg(normal), down, right),
            Dir::West => (normal, down, neg(right)),
            Dir::South => (right, neg(normal), down),
            Dir::North => (right, normal, neg(down)),
        };
        Face { origin, right, down, normal }
    }
}

#[derive(Debug)]
pub struct Cube {
    size: usize,
    faces: Vec<Face>,
    by_block: HashMap<Pos, usize>,
}

impl Cube {
    /// Fold the map's net into a cube, or `None` if it is not a cube net
    pub fn fold(map: &Grid<u8>) -> Option<Cube> {
        let tiles = map.cells().iter().filter(|&&b| b != VOID).count();
        let size = (tiles / 6).isqrt();
        if size == 0 || size * size * 6 != tiles {
            return None;
        }
        let blocks: Vec<Pos> = (0..map.height() / size)
            .flat_map(|by| (0..map.width() / size).map(move |bx| (bx, by)))
            .filter(|&(bx, by)| map[(bx * size, by * size)] != VOID)
            .collect();
        let &first = blocks.first()?;

        let mut faces = vec![Face {
            origin: (first.0 * size, first.1 * size),
            right: [1, 0, 0],
            down: [0, 1, 0],
            normal: [0, 0, 1],
        }];
        let mut by_block = HashMap::from([(first, 0)]);
        let mut queue = VecDeque::from([first]);
        while let Some(block) = queue.pop_front() {
            let face = faces[by_block[&block]];
            for dir in Dir::ALL {
                let (dx, dy) = dir.delta();
                let (nx, ny) = (block.0 as i64 + dx, block.1 as i64 + dy);
                if nx < 0 || ny < 0 {
                    continue;
                }
                let next = (nx as usize, ny as usize);
                if blocks.contains(&next) && !by_block.contains_key(&next) {
                    by_block.insert(next, faces.len());
                    faces.push(face.fold(dir, (next.0 * size, next.1 * size)));
                    queue.push_back(next);
                }
            }
        }
        let distinct = faces
            .iter()
            .all(|f| faces.iter().filter(|g| g.normal == f.normal).count() == 1);
        (faces.len() == 6 && distinct).then_some(Cube { size, faces, by_block })
    }

    /// Cross the cube edge when stepping off the face under `pos`
    fn wrap(&self, (x, y): Pos, dir: Dir) -> Option<(Pos, Dir)> {
        let n = self.size;
        let from = self.faces[*self.by_block.get(&(x / n, y / n))?];
        let (lx, ly) = (x - from.origin.0, y - from.origin.1);
        let travel = from.axis(dir);
        let to = self.faces.iter().find(|f| f.normal == travel)?;

        let (along, offset) = match dir {
            Dir::East | Dir::West => (from.down, ly),
            Dir::North | Dir::South => (from.right, lx),
        };
        let entry = Dir::ALL
            .into_iter()
            .find(|&d| to.axis(d) == neg(from.normal))?;
        let edge = |axis: V3| if axis == along { offset } else { n - 1 - offset };
        let (tx, ty) = match entry {
            Dir::East => (0, edge(to.down)),
            Dir::West => (n - 1, edge(to.down)),
            Dir::South => (edge(to.right), 0),
            Dir::North => (edge(to.right), n - 1),
        };
        Some(((to.origin.0 + tx, to.origin.1 + ty), entry))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let notes = &*shared;
        Ok(walk(notes, |pos, dir| wrap_flat(&notes.map, pos, dir))?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let cube = Cube::fold(&shared.map)
            .ok_or_else(|| SolveError::failed("map is not a cube net"))?;
        Ok(walk(&*shared, |pos, dir| cube.wrap(pos, dir))?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = r"
        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

    #[test]
    fn path_parses() {
        let notes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(notes.path.len(), 13);
        assert_eq!(notes.path[0], Step::Forward(10));
        assert_eq!(notes.path[1], Step::Right);
    }

    #[test]
    fn cube_edge_crossing() {
        let notes = Solver::parse(EXAMPLE).unwrap();
        let cube = Cube::fold(&notes.map).unwrap();
        assert_eq!(cube.wrap((11, 5), Dir::East), Some(((14, 8), Dir::South)));
        assert_eq!(cube.wrap((10, 11), Dir::South), Some(((1, 7), Dir::North)));
    }

    /// Blow up a net layout (`#` = face) into a map of `size`-wide faces
    fn net(layout: &[&str], size: usize) -> Grid<u8> {
        let width = layout.iter().map(|r| r.len()).max().unwrap() * size;
        let mut map = Grid::new(width, layout.len() * size, VOID);
        for (by, row) in layout.iter().enumerate() {
            for (bx, _) in row.bytes().enumerate().filter(|&(_, b)| b == b'#') {
                for y in 0..size {
                    for x in 0..size {
                        map[(bx * size + x, by * size + y)] = b'.';
                    }
                }
            }
        }
        map
    }

    /// Every step off the board lands on the board, and stepping back off
    /// returns to where it started
    fn assert_edges_pair_up(map: &Grid<u8>) {
        let cube = Cube::fold(map).unwrap();
        let mut crossings = 0;
        for pos in map.positions().filter(|&p| map[p] != VOID) {
            for dir in Dir::ALL {
                if step_on(map, pos, dir).is_some() {
                    continue;
                }
                let (to, facing) = cube.wrap(pos, dir).unwrap();
                assert_ne!(map[to], VOID);
                assert!(step_on(map, to, facing.opposite()).is_none());
                assert_eq!(cube.wrap(to, facing.opposite()), Some((pos, dir.opposite())));
                crossings += 1;
            }
        }
        // a net keeps 14 of the cube's 24 face edges on its outline
        assert_eq!(crossings, 14 * cube.size);
    }

    #[test]
    fn example_net_edges_pair_up() {
        assert_edges_pair_up(&net(&["..#.", "###.", "..##"], 4));
    }

    #[test]
    fn other_nets_fold() {
        assert_edges_pair_up(&net(&[".##", ".#.", "##.", "#.."], 4));
        assert_edges_pair_up(&net(&["#...", "####", "#..."], 3));
        assert_edges_pair_up(&net(&["##..", ".###", "...#"], 2));
    }

    #[test]
    fn non_cube_nets_rejected() {
        assert!(Cube::fold(&net(&["####", "##.."], 3)).is_none());
        assert!(Cube::fold(&net(&["#####"], 3)).is_none());
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "6032");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "5031");
    }
}
