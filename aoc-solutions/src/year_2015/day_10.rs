use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["y2015", "strings"])]
pub struct Solver;

pub struct SharedData {
    digits: Vec<u8>,
    /// Sequence after part 1, so part 2 only runs the remaining rounds
    after_forty: Option<Vec<u8>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let digits = input
            .trim()
            .bytes()
            .map(|b| {
                b.is_ascii_digit()
                    .then_some(b - b'0')
                    .ok_or_else(|| ParseError::InvalidFormat(format!("not a digit: {}", b as char)))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        if digits.is_empty() {
            return Err(ParseError::MissingData("empty sequence".into()));
        }
        Ok(SharedData {
            digits,
            after_forty: None,
        })
    }
}

pub fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 2);
    for (count, digit) in digits.iter().dedup_with_count() {
        next.push(count as u8);
        next.push(*digit);
    }
    next
}

fn apply_rounds(digits: &[u8], rounds: usize) -> Vec<u8> {
    (0..rounds).fold(digits.to_vec(), |seq, _| look_and_say(&seq))
}

fn after_forty(shared: &mut SharedData) -> &[u8] {
    shared
        .after_forty
        .get_or_insert_with(|| apply_rounds(&shared.digits, 40))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(after_forty(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(apply_rounds(after_forty(shared), 10).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds() {
        assert_eq!(look_and_say(&[1]), vec![1, 1]);
        assert_eq!(look_and_say(&[1, 1]), vec![2, 1]);
        assert_eq!(look_and_say(&[2, 1]), vec![1, 2, 1, 1]);
        assert_eq!(apply_rounds(&[1], 5), vec![3, 1, 2, 2, 1, 1]);
    }
}
