use std::collections::{HashMap, HashSet, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 22, tags = ["y2023", "3d", "graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    lo: [u32; 3],
    hi: [u32; 3],
}

impl Brick {
    fn columns(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (lo, hi) = (self.lo, self.hi);
        (lo[0]..=hi[0]).flat_map(move |x| (lo[1]..=hi[1]).map(move |y| (x, y)))
    }
}

/// Which bricks rest on which, once everything has settled
#[derive(Debug)]
pub struct Stack {
    supports: Vec<HashSet<usize>>,
    resting_on: Vec<HashSet<usize>>,
}

impl AocParser for Solver {
    type SharedData<'a> = Stack;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let bricks = input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match extract_unsigned::<u32>(line).as_slice() {
                &[x1, y1, z1, x2, y2, z2] => Ok(Brick {
                    lo: [x1.min(x2), y1.min(y2), z1.min(z2)],
                    hi: [x1.max(x2), y1.max(y2), z1.max(z2)],
                }),
                _ => Err(ParseError::InvalidFormat(format!("bad brick {:?}", line))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(settle(bricks))
    }
}

/// Drop every brick as far as it goes and record what ends up touching what
pub fn settle(mut bricks: Vec<Brick>) -> Stack {
    bricks.sort_by_key(|b| b.lo[2]);
    let n = bricks.len();
    let mut supports = vec![HashSet::new(); n];
    let mut resting_on = vec![HashSet::new(); n];
    // Highest settled cube in each column and the brick it belongs to
    let mut top: HashMap<(u32, u32), (u32, usize)> = HashMap::new();
    for (i, brick) in bricks.iter().enumerate() {
        let floor = brick
            .columns()
            .filter_map(|c| top.get(&c).map(|&(z, _)| z))
            .max()
            .unwrap_or(0);
        for column in brick.columns() {
            if let Some(&(z, below)) = top.get(&column) {
                if z == floor && floor > 0 {
                    supports[below].insert(i);
                    resting_on[i].insert(below);
                }
            }
        }
        let height = brick.hi[2] - brick.lo[2];
        for column in brick.columns() {
            top.insert(column, (floor + 1 + height, i));
        }
    }
    Stack { supports, resting_on }
}

impl Stack {
    /// Bricks that would fall if brick `i` were disintegrated
    pub fn chain_reaction(&self, i: usize) -> usize {
        let mut falling = HashSet::from([i]);
        let mut queue = VecDeque::from([i]);
        while let Some(b) = queue.pop_front() {
            for &above in &self.supports[b] {
                if !falling.contains(&above)
                    && self.resting_on[above].iter().all(|r| falling.contains(r))
                {
                    falling.insert(above);
                    queue.push_back(above);
                }
            }
        }
        falling.len() - 1
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = (0..shared.supports.len())
            .filter(|&i| shared.supports[i].iter().all(|&a| shared.resting_on[a].len() > 1))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: usize = (0..shared.supports.len())
            .map(|i| shared.chain_reaction(i))
            .sum();
        Ok(total.to_string())
    }
}
