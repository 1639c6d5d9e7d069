use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 8, tags = ["y2015", "strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                if l.len() >= 2 && l.starts_with('"') && l.ends_with('"') {
                    Ok(l)
                } else {
                    Err(ParseError::InvalidFormat(format!("not a string literal: {}", l)))
                }
            })
            .collect()
    }
}

/// Characters the literal decodes to
fn memory_len(literal: &str) -> usize {
    let body = &literal.as_bytes()[1..literal.len() - 1];
    let mut len = 0;
    let mut i = 0;
    while i < body.len() {
        i += match (body[i], body.get(i + 1)) {
            (b'\\', Some(b'x')) => 4,
            (b'\\', Some(_)) => 2,
            _ => 1,
        };
        len += 1;
    }
    len
}

/// Characters needed to write the literal itself as a literal
fn encoded_len(literal: &str) -> usize {
    2 + literal.len() + literal.chars().filter(|&c| c == '"' || c == '\\').count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let diff: usize = shared.iter().map(|l| l.len() - memory_len(l)).sum();
        Ok(diff.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let diff: usize = shared.iter().map(|l| encoded_len(l) - l.len()).sum();
        Ok(diff.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn decoded_lengths() {
        assert_eq!(memory_len(r#""""#), 0);
        assert_eq!(memory_len(r#""aaa\"aaa""#), 7);
        assert_eq!(memory_len(r#""\x27""#), 1);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "12");
    }

    #[test]
    fn encoded_lengths() {
        assert_eq!(encoded_len(r#""""#), 6);
        assert_eq!(encoded_len(r#""\x27""#), 11);
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "19");
    }
}
