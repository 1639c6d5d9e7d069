use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["y2023", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Races<'a> {
    times: &'a str,
    records: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = Races<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());
        let mut field = |name: &str| -> Result<&'a str, ParseError> {
            lines
                .next()
                .and_then(|l| l.strip_prefix(name))
                .ok_or_else(|| ParseError::MissingData(format!("no {} line", name)))
        };
        let times = field("Time:")?;
        let records = field("Distance:")?;
        Ok(Races { times, records })
    }
}

/// Hold times that beat `record` in a race lasting `time`.
///
/// Holding for `h` travels `h * (time - h)`, so the winners lie strictly
/// between the roots of `h^2 - time*h + record = 0`.
pub fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |h: u64| h * (time - h) > record;
    let disc = (time * time) as f64 - 4.0 * record as f64;
    if disc < 0.0 {
        return 0;
    }
    let root = disc.sqrt();
    let mut lo = ((time as f64 - root) / 2.0).floor().max(0.0) as u64;
    let mut hi = (((time as f64 + root) / 2.0).ceil() as u64).min(time);
    // Float roots can land a step off either way
    while lo <= hi && !beats(lo) {
        lo += 1;
    }
    while hi >= lo && !beats(hi) {
        hi -= 1;
    }
    if lo > hi { 0 } else { hi - lo + 1 }
}

/// Read the digits of a line as one number, ignoring the spaces between them
fn kerned(line: &str) -> Result<u64, SolveError> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| SolveError::failed(format!("no number in {:?}", line)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let times: Vec<u64> = extract_unsigned(shared.times);
        let records: Vec<u64> = extract_unsigned(shared.records);
        if times.len() != records.len() {
            return Err(SolveError::failed("times and records differ in length"));
        }
        let product: u64 = times
            .iter()
            .zip(&records)
            .map(|(&t, &r)| ways_to_win(t, r))
            .product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(ways_to_win(kerned(shared.times)?, kerned(shared.records)?).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

    #[test]
    fn single_races() {
        assert_eq!(ways_to_win(7, 9), 4);
        assert_eq!(ways_to_win(15, 40), 8);
        assert_eq!(ways_to_win(30, 200), 9);
        assert_eq!(ways_to_win(4, 100), 0);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "288");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "71503");
    }
}
