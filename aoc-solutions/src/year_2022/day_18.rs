use std::collections::HashSet;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 18, tags = ["y2022", "search", "3d"])]
pub struct Solver;

type Cube = [i32; 3];

const FACES: [Cube; 6] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
];

fn neighbours(c: Cube) -> impl Iterator<Item = Cube> {
    FACES
        .into_iter()
        .map(move |d| [c[0] + d[0], c[1] + d[1], c[2] + d[2]])
}

impl AocParser for Solver {
    type SharedData<'a> = HashSet<Cube>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| -> anyhow::Result<Cube> {
                let coords = line
                    .split(',')
                    .map(|n| n.trim().parse::<i32>())
                    .collect::<Result<Vec<_>, _>>()
                    .with_context(|| format!("cube {:?}", line))?;
                coords
                    .try_into()
                    .map_err(|_| anyhow!("cube {:?} needs three coordinates", line))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Faces not touching another cube, air pockets included
pub fn surface_area(cubes: &HashSet<Cube>) -> usize {
    cubes
        .iter()
        .flat_map(|&c| neighbours(c))
        .filter(|n| !cubes.contains(n))
        .count()
}

/// Faces reachable by steam flowing around the droplet
pub fn exterior_area(cubes: &HashSet<Cube>) -> usize {
    let Some(lo) = (0..3)
        .map(|axis| cubes.iter().map(|c| c[axis]).min())
        .collect::<Option<Vec<_>>>()
    else {
        return 0;
    };
    let hi: Vec<i32> = (0..3)
        .map(|axis| cubes.iter().map(|c| c[axis]).max().unwrap_or(0))
        .collect();
    let inside = |c: &Cube| (0..3).all(|a| c[a] >= lo[a] - 1 && c[a] <= hi[a] + 1);

    let start = [lo[0] - 1, lo[1] - 1, lo[2] - 1];
    let mut steam = HashSet::from([start]);
    let mut stack = vec![start];
    let mut faces = 0;
    while let Some(c) = stack.pop() {
        for n in neighbours(c) {
            if cubes.contains(&n) {
                faces += 1;
            } else if inside(&n) && steam.insert(n) {
                stack.push(n);
            }
        }
    }
    faces
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(surface_area(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(exterior_area(shared).to_string())
    }
}
