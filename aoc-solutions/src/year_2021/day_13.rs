use std::collections::BTreeSet;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 13, tags = ["y2021", "grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    X(u32),
    Y(u32),
}

impl Fold {
    fn apply(self, (x, y): (u32, u32)) -> (u32, u32) {
        match self {
            Fold::X(line) if x > line => (2 * line - x, y),
            Fold::Y(line) if y > line => (x, 2 * line - y),
            _ => (x, y),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Manual {
    dots: BTreeSet<(u32, u32)>,
    folds: Vec<Fold>,
}

fn parse_manual(input: &str) -> anyhow::Result<Manual> {
    let (dots, folds) = input
        .trim()
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected dots, a blank line, then folds"))?;
    let dots = dots
        .lines()
        .map(|line| -> anyhow::Result<(u32, u32)> {
            let (x, y) = line
                .trim()
                .split_once(',')
                .ok_or_else(|| anyhow!("bad dot {:?}", line))?;
            Ok((x.parse().context("dot x")?, y.parse().context("dot y")?))
        })
        .collect::<anyhow::Result<_>>()?;
    let folds = folds
        .lines()
        .map(|line| -> anyhow::Result<Fold> {
            let (axis, at) = line
                .trim()
                .strip_prefix("fold along ")
                .and_then(|f| f.split_once('='))
                .ok_or_else(|| anyhow!("bad fold {:?}", line))?;
            let at = at.parse().context("fold position")?;
            match axis {
                "x" => Ok(Fold::X(at)),
                "y" => Ok(Fold::Y(at)),
                _ => bail!("bad fold axis {:?}", axis),
            }
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Manual { dots, folds })
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_manual(input).map_err(invalid_format)
    }
}

fn fold_all(dots: &BTreeSet<(u32, u32)>, folds: &[Fold]) -> BTreeSet<(u32, u32)> {
    dots.iter()
        .map(|&dot| folds.iter().fold(dot, |d, f| f.apply(d)))
        .collect()
}

/// Dots drawn as `#` on `.`, one line per row
pub fn render(dots: &BTreeSet<(u32, u32)>) -> String {
    let width = dots.iter().map(|d| d.0 + 1).max().unwrap_or(0);
    let height = dots.iter().map(|d| d.1 + 1).max().unwrap_or(0);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = shared
            .folds
            .first()
            .ok_or_else(|| SolveError::failed("no folds"))?;
        Ok(fold_all(&shared.dots, std::slice::from_ref(first)).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(render(&fold_all(&shared.dots, &shared.folds)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    #[test]
    fn first_fold() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "17");
    }

    #[test]
    fn rendered_code() {
        let expected = "#####\n#...#\n#...#\n#...#\n#####";
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), expected);
    }
}
