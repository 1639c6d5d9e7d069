use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["y2021", "bits"])]
pub struct Solver;

#[derive(Debug)]
pub struct Report {
    width: usize,
    values: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = Report;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.split_whitespace().collect();
        let width = lines
            .first()
            .map(|l| l.len())
            .ok_or_else(|| ParseError::MissingData("empty report".into()))?;
        let values = lines
            .iter()
            .map(|l| {
                if l.len() != width {
                    return Err(ParseError::InvalidFormat(format!("ragged line {:?}", l)));
                }
                u32::from_str_radix(l, 2)
                    .map_err(|_| ParseError::InvalidFormat(format!("not binary: {:?}", l)))
            })
            .collect::<Result<_, _>>()?;
        Ok(Report { width, values })
    }
}

fn ones_at(values: &[u32], bit: usize) -> usize {
    values.iter().filter(|&&v| v >> bit & 1 == 1).count()
}

/// Keep filtering on the most (or least) common bit until one value remains
fn rating(report: &Report, most_common: bool) -> u32 {
    let mut candidates = report.values.clone();
    for bit in (0..report.width).rev() {
        if candidates.len() <= 1 {
            break;
        }
        let ones = ones_at(&candidates, bit);
        let ones_win = ones * 2 >= candidates.len();
        let keep = u32::from(ones_win == most_common);
        candidates.retain(|&v| v >> bit & 1 == keep);
    }
    candidates.first().copied().unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let gamma = (0..shared.width)
            .filter(|&bit| ones_at(&shared.values, bit) * 2 > shared.values.len())
            .fold(0u32, |acc, bit| acc | 1 << bit);
        let epsilon = !gamma & ((1 << shared.width) - 1);
        Ok((gamma as u64 * epsilon as u64).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = rating(shared, true) as u64;
        let co2 = rating(shared, false) as u64;
        Ok((oxygen * co2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    #[test]
    fn power_consumption() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "198");
    }

    #[test]
    fn life_support() {
        let report = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(rating(&report, true), 23);
        assert_eq!(rating(&report, false), 10);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "230");
    }
}
