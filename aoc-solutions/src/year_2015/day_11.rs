use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["y2015", "strings"])]
pub struct Solver;

const FORBIDDEN: [u8; 3] = [b'i', b'o', b'l'];

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let password = input.trim().as_bytes().to_vec();
        if password.is_empty() || !password.iter().all(u8::is_ascii_lowercase) {
            return Err(ParseError::InvalidFormat(format!(
                "password must be lowercase letters: {:?}",
                input.trim()
            )));
        }
        Ok(password)
    }
}

fn increment(password: &mut [u8]) {
    for c in password.iter_mut().rev() {
        if *c == b'z' {
            *c = b'a';
        } else {
            *c += 1;
            return;
        }
    }
}

/// Bump the first forbidden letter and reset everything after it
fn skip_forbidden(password: &mut [u8]) {
    if let Some(i) = password.iter().position(|c| FORBIDDEN.contains(c)) {
        password[i] += 1;
        password[i + 1..].fill(b'a');
    }
}

fn is_valid(password: &[u8]) -> bool {
    let straight = password
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    let clean = !password.iter().any(|c| FORBIDDEN.contains(c));
    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < password.len() {
        if password[i] == password[i + 1] {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    straight && clean && pairs >= 2
}

pub fn next_password(current: &[u8]) -> Vec<u8> {
    let mut password = current.to_vec();
    loop {
        increment(&mut password);
        skip_forbidden(&mut password);
        if is_valid(&password) {
            return password;
        }
    }
}

fn as_answer(password: &[u8]) -> String {
    String::from_utf8_lossy(password).into_owned()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(as_answer(&next_password(shared)))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(as_answer(&next_password(&next_password(shared))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn validity_rules() {
        assert!(!is_valid(b"hijklmmn"));
        assert!(!is_valid(b"abbceffg"));
        assert!(!is_valid(b"abbcegjk"));
        assert!(is_valid(b"abcdffaa"));
    }

    #[test]
    fn next_passwords() {
        assert_eq!(solve_example::<Solver>("abcdefgh", 1), "abcdffaa");
        assert_eq!(solve_example::<Solver>("ghijklmn", 1), "ghjaabcc");
    }
}
