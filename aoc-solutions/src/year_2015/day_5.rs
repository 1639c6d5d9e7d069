use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["y2015", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect())
    }
}

fn is_nice(s: &str) -> bool {
    let vowels = s.chars().filter(|c| "aeiou".contains(*c)).count();
    let double = s.as_bytes().windows(2).any(|w| w[0] == w[1]);
    let banned = ["ab", "cd", "pq", "xy"].iter().any(|b| s.contains(b));
    vowels >= 3 && double && !banned
}

fn is_nicer(s: &str) -> bool {
    let bytes = s.as_bytes();
    let repeated_pair = (0..bytes.len().saturating_sub(1))
        .any(|i| s[i + 2..].contains(&s[i..i + 2]));
    let sandwich = bytes.iter().tuple_windows().any(|(a, _, c)| a == c);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice(s)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nicer(s)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_rules() {
        assert!(is_nice("ugknbfddgicrmopn"));
        assert!(is_nice("aaa"));
        assert!(!is_nice("jchzalrnumimnmhp"));
        assert!(!is_nice("haegwjzuvuyypxyu"));
        assert!(!is_nice("dvszwmarrgswjxmb"));
    }

    #[test]
    fn second_rules() {
        assert!(is_nicer("qjhvhtzxzqqjkmpb"));
        assert!(is_nicer("xxyxx"));
        assert!(!is_nicer("uurcxstgmygtbstg"));
        assert!(!is_nicer("ieodomkazucvgmuy"));
        assert!(!is_nicer("aaa"));
    }
}
