use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2022, day = 25, tags = ["y2022", "math"])]
pub struct Solver;

/// Decode a balanced base-five number with digits `=-012`
pub fn from_snafu(text: &str) -> Option<i64> {
    text.chars().try_fold(0i64, |acc, c| {
        let digit = match c {
            '2' => 2,
            '1' => 1,
            '0' => 0,
            '-' => -1,
            '=' => -2,
            _ => return None,
        };
        acc.checked_mul(5)?.checked_add(digit)
    })
}

pub fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".into();
    }
    let mut digits = Vec::new();
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|s| from_snafu(s).ok_or_else(|| ParseError::InvalidFormat(format!("bad SNAFU {:?}", s))))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(to_snafu(shared.iter().sum()))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122
";

    #[test]
    fn conversions() {
        assert_eq!(to_snafu(2022), "1=11-2");
        assert_eq!(to_snafu(314159265), "1121-1110-1=0");
        assert_eq!(from_snafu("1=-0-2"), Some(1747));
        assert_eq!(from_snafu("12a"), None);
    }

    proptest! {
        #[test]
        fn snafu_encoding_is_reversible(n in 0i64..1_000_000_000_000) {
            let encoded = to_snafu(n);
            prop_assert!(!encoded.starts_with('0') || n == 0);
            prop_assert_eq!(from_snafu(&encoded), Some(n));
        }
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "2=-1=0");
    }
}
