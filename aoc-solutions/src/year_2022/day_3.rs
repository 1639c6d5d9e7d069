use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["y2022", "bits"])]
pub struct Solver;

fn priority(b: u8) -> Option<u32> {
    match b {
        b'a'..=b'z' => Some((b - b'a') as u32 + 1),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 27),
        _ => None,
    }
}

/// Item types as a bit set indexed by priority
fn item_set(items: &[u8]) -> u64 {
    items
        .iter()
        .filter_map(|&b| priority(b))
        .fold(0, |set, p| set | 1 << p)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a [u8]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|sack| {
                if sack.len() % 2 == 0 && sack.bytes().all(|b| priority(b).is_some()) {
                    Ok(sack.as_bytes())
                } else {
                    Err(ParseError::InvalidFormat(format!("bad rucksack {:?}", sack)))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .map(|sack| {
                let (left, right) = sack.split_at(sack.len() / 2);
                (item_set(left) & item_set(right)).trailing_zeros() % 64
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .chunks(3)
            .map(|group| {
                let common = group.iter().fold(u64::MAX, |acc, sack| acc & item_set(sack));
                common.trailing_zeros() % 64
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn misplaced_items() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "157");
    }

    #[test]
    fn badges() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "70");
    }
}
