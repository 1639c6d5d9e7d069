use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["y2023", "string"])]
pub struct Solver;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

/// The digit starting at byte `i`, optionally counting spelled-out words.
/// Words may overlap, so `eightwo` holds both an 8 and a 2.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    if let Some(d) = rest.first().and_then(|&b| (b as char).to_digit(10)) {
        return Some(d);
    }
    if !spelled {
        return None;
    }
    WORDS
        .iter()
        .position(|w| rest.starts_with(w.as_bytes()))
        .map(|k| k as u32 + 1)
}

pub fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, spelled));
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn total(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    let mut sum = 0;
    for line in lines {
        sum += calibration_value(line, spelled)
            .ok_or_else(|| SolveError::failed(format!("no digit in {:?}", line)))?;
    }
    Ok(sum.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, true)
    }
}
