use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::geometry::manhattan;
use crate::utils::numbers::extract_numbers;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 15, tags = ["y2022", "geometry"])]
pub struct Solver;

const ROW: i64 = 2_000_000;
const BOUND: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
pub struct Sensor {
    pos: (i64, i64),
    beacon: (i64, i64),
    radius: i64,
}

impl Sensor {
    fn covers(&self, p: (i64, i64)) -> bool {
        manhattan(self.pos, p) <= self.radius
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sensor>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| match extract_numbers::<i64>(line).as_slice() {
                &[sx, sy, bx, by] => Ok(Sensor {
                    pos: (sx, sy),
                    beacon: (bx, by),
                    radius: manhattan((sx, sy), (bx, by)),
                }),
                _ => Err(ParseError::InvalidFormat(format!("bad sensor {:?}", line))),
            })
            .collect()
    }
}

/// Positions on `row` where no undetected beacon can be
pub fn excluded_on_row(sensors: &[Sensor], row: i64) -> i64 {
    let mut spans: Vec<(i64, i64)> = sensors
        .iter()
        .filter_map(|s| {
            let reach = s.radius - (s.pos.1 - row).abs();
            (reach >= 0).then_some((s.pos.0 - reach, s.pos.0 + reach))
        })
        .collect();
    spans.sort_unstable();
    let mut covered = 0;
    let mut end = i64::MIN;
    for (lo, hi) in spans {
        let lo = lo.max(end + 1);
        if hi >= lo {
            covered += hi - lo + 1;
            end = hi;
        }
    }
    let beacons: HashSet<(i64, i64)> = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|b| b.1 == row)
        .collect();
    covered - beacons.len() as i64
}

/// The only uncovered position within `0..=bound` on both axes.
///
/// It must sit just outside some sensor's range, where a rising and a falling
/// boundary line cross, so only those crossings are checked.
pub fn distress_beacon(sensors: &[Sensor], bound: i64) -> Option<(i64, i64)> {
    let mut rising = Vec::new();
    let mut falling = Vec::new();
    for s in sensors {
        let (x, y) = s.pos;
        let r = s.radius + 1;
        rising.extend([y - x + r, y - x - r]);
        falling.extend([y + x + r, y + x - r]);
    }
    let in_bounds = |v: i64| (0..=bound).contains(&v);
    rising
        .iter()
        .flat_map(|&a| falling.iter().map(move |&b| (a, b)))
        .filter(|(a, b)| (b - a) % 2 == 0)
        .map(|(a, b)| ((b - a) / 2, (a + b) / 2))
        .filter(|&(x, y)| in_bounds(x) && in_bounds(y))
        .find(|&p| sensors.iter().all(|s| !s.covers(p)))
}

fn tuning_frequency(sensors: &[Sensor], bound: i64) -> Result<String, SolveError> {
    distress_beacon(sensors, bound)
        .map(|(x, y)| (x * 4_000_000 + y).to_string())
        .ok_or_else(|| SolveError::failed("no uncovered position"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(excluded_on_row(shared, ROW).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        tuning_frequency(shared, BOUND)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EXAMPLE: &str = "\
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3
";

    #[test]
    fn row_coverage() {
        let sensors = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(excluded_on_row(&sensors, 10), 26);
    }

    proptest! {
        #[test]
        fn row_coverage_matches_brute_force(
            sensors in prop::collection::vec((-20i64..20, -20i64..20, -20i64..20, -20i64..20), 1..6),
            row in -20i64..20,
        ) {
            let sensors: Vec<Sensor> = sensors
                .into_iter()
                .map(|(sx, sy, bx, by)| Sensor {
                    pos: (sx, sy),
                    beacon: (bx, by),
                    radius: manhattan((sx, sy), (bx, by)),
                })
                .collect();
            let brute = (-100..=100)
                .filter(|&x| sensors.iter().any(|s| s.covers((x, row))))
                .filter(|&x| sensors.iter().all(|s| s.beacon != (x, row)))
                .count() as i64;
            prop_assert_eq!(excluded_on_row(&sensors, row), brute);
        }
    }

    #[test]
    fn beacon_position() {
        let sensors = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(distress_beacon(&sensors, 20), Some((14, 11)));
        assert_eq!(tuning_frequency(&sensors, 20).unwrap(), "56000011");
    }
}
