use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::enclosed_points;
use crate::utils::grid::Dir;
use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 18, tags = ["y2023", "geometry"])]
pub struct Solver;

pub type Dig = (Dir, i64);

/// Each line of the plan read both ways: as written, and decoded from the colour
#[derive(Debug)]
pub struct DigPlan {
    written: Vec<Dig>,
    decoded: Vec<Dig>,
}

impl AocParser for Solver {
    type SharedData<'a> = DigPlan;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (written, decoded) = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(parse_line)
            .collect::<anyhow::Result<(Vec<_>, Vec<_>)>>()
            .map_err(invalid_format)?;
        Ok(DigPlan { written, decoded })
    }
}

fn parse_line(line: &str) -> anyhow::Result<(Dig, Dig)> {
    let mut fields = line.split_whitespace();
    let (Some(dir), Some(len), Some(colour)) = (fields.next(), fields.next(), fields.next()) else {
        return Err(anyhow!("bad dig step {:?}", line));
    };
    let dir = dir
        .chars()
        .next()
        .and_then(Dir::from_char)
        .ok_or_else(|| anyhow!("bad direction {:?}", dir))?;
    let len = len.parse().context("dig length")?;

    let hex = colour
        .strip_prefix("(#")
        .and_then(|c| c.strip_suffix(')'))
        .filter(|h| h.len() == 6)
        .ok_or_else(|| anyhow!("bad colour {:?}", colour))?;
    let distance = i64::from_str_radix(&hex[..5], 16).context("colour distance")?;
    let heading = match &hex[5..] {
        "0" => Dir::East,
        "1" => Dir::South,
        "2" => Dir::West,
        "3" => Dir::North,
        other => return Err(anyhow!("bad colour direction {:?}", other)),
    };
    Ok(((dir, len), (heading, distance)))
}

/// Cubic metres of lava the dug-out lagoon holds
pub fn lagoon_volume(plan: &[Dig]) -> i64 {
    let mut corner = (0, 0);
    let vertices: Vec<(i64, i64)> = plan
        .iter()
        .map(|&(dir, len)| {
            let (dx, dy) = dir.delta();
            corner = (corner.0 + dx * len, corner.1 + dy * len);
            corner
        })
        .collect();
    enclosed_points(&vertices)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(&shared.written).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(lagoon_volume(&shared.decoded).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn colour_decoding() {
        let plan = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(plan.decoded[0], (Dir::East, 461937));
        assert_eq!(plan.decoded[1], (Dir::South, 56407));
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "62");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "952408144115");
    }
}
