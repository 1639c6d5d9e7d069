use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 14, tags = ["y2015", "simulation"])]
pub struct Solver;

const RACE_SECONDS: u32 = 2503;

#[derive(Debug, Clone, Copy)]
pub struct Reindeer {
    speed: u32,
    fly: u32,
    rest: u32,
}

impl Reindeer {
    fn distance_after(&self, seconds: u32) -> u32 {
        let cycle = self.fly + self.rest;
        let full = seconds / cycle;
        let partial = (seconds % cycle).min(self.fly);
        (full * self.fly + partial) * self.speed
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Reindeer>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match extract_unsigned::<u32>(line).as_slice() {
                &[speed, fly, rest] if fly + rest > 0 => Ok(Reindeer { speed, fly, rest }),
                _ => Err(ParseError::InvalidFormat(format!("bad reindeer: {}", line))),
            })
            .collect()
    }
}

pub fn winning_distance(herd: &[Reindeer], seconds: u32) -> u32 {
    herd.iter().map(|r| r.distance_after(seconds)).max().unwrap_or(0)
}

/// One point per second to every reindeer in the lead
pub fn winning_points(herd: &[Reindeer], seconds: u32) -> u32 {
    let mut points = vec![0; herd.len()];
    for t in 1..=seconds {
        let lead = winning_distance(herd, t);
        for (i, r) in herd.iter().enumerate() {
            if r.distance_after(t) == lead {
                points[i] += 1;
            }
        }
    }
    points.into_iter().max().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_distance(shared, RACE_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winning_points(shared, RACE_SECONDS).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Comet can fly 14 km/s for 10 seconds, but then must rest for 127 seconds.
Dancer can fly 16 km/s for 11 seconds, but then must rest for 162 seconds.
";

    #[test]
    fn distance_race() {
        let herd = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(herd[0].distance_after(1000), 1120);
        assert_eq!(herd[1].distance_after(1000), 1056);
        assert_eq!(winning_distance(&herd, 1000), 1120);
    }

    #[test]
    fn points_race() {
        let herd = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(winning_points(&herd, 1000), 689);
    }
}
