use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use md5::{Digest, Md5};

use crate::utils::progress::Throttle;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["y2015", "hash"])]
pub struct Solver;

pub struct Mining<'a> {
    key: &'a str,
    /// Part 1 answer; any six-zero coin is also a five-zero coin, so part 2 starts here
    five_zeros: Option<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Mining<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("empty secret key".into()));
        }
        Ok(Mining {
            key,
            five_zeros: None,
        })
    }
}

/// Whether the hex form of `digest` starts with `zeros` zero digits
pub fn has_leading_zeros(digest: &[u8], zeros: usize) -> bool {
    let (full, half) = (zeros / 2, zeros % 2 == 1);
    digest.len() >= full + usize::from(half)
        && digest[..full].iter().all(|&b| b == 0)
        && (!half || digest[full] >> 4 == 0)
}

/// Lowest number from `start` whose hash with `key` mines a coin
pub fn mine(key: &str, zeros: usize, start: u64) -> Option<u64> {
    let mut throttle = Throttle::new("md5", 1_000_000);
    let prefix = Md5::new_with_prefix(key.as_bytes());
    (start..).find(|n| {
        throttle.tick(|| format!("trying {}{}", key, n));
        let digest = prefix.clone().chain_update(n.to_string().as_bytes()).finalize();
        has_leading_zeros(&digest, zeros)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n = mine(shared.key, 5, 1).ok_or_else(|| SolveError::failed("no coin found"))?;
        shared.five_zeros = Some(n);
        Ok(n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = shared.five_zeros.unwrap_or(1);
        mine(shared.key, 6, start)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("no coin found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn zero_prefix_by_nibble() {
        assert!(has_leading_zeros(&[0x00, 0x00, 0x0f, 0xff], 5));
        assert!(!has_leading_zeros(&[0x00, 0x00, 0x1f, 0xff], 5));
        assert!(has_leading_zeros(&[0x00, 0x00, 0x00, 0xff], 6));
        assert!(!has_leading_zeros(&[0x00, 0x00, 0x0f, 0xff], 6));
        assert!(has_leading_zeros(&[0xab], 0));
    }

    #[test]
    fn known_hash() {
        let digest = Md5::digest(b"abcdef609043");
        assert!(has_leading_zeros(&digest, 5));
        assert_eq!(format!("{:02x}{:02x}{:02x}", digest[0], digest[1], digest[2]), "000001");
    }

    #[test]
    fn first_coins() {
        assert_eq!(solve_example::<Solver>("abcdef\n", 1), "609043");
        assert_eq!(solve_example::<Solver>("pqrstuv", 1), "1048970");
    }

    #[test]
    fn search_resumes_from_start() {
        assert_eq!(mine("abcdef", 5, 609043), Some(609043));
        assert_eq!(mine("abcdef", 5, 600000), Some(609043));
    }
}
