use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 20, tags = ["y2022", "simulation"])]
pub struct Solver;

const DECRYPTION_KEY: i64 = 811_589_153;

impl AocParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad number {:?}", n)))
            })
            .collect()
    }
}

/// Mix the numbers `rounds` times and return them in their final circular order
pub fn mix(numbers: &[i64], rounds: usize) -> Vec<i64> {
    let n = numbers.len();
    // order[k] is the original index of the number at position k
    let mut order: Vec<usize> = (0..n).collect();
    if n > 1 {
        let span = n as i64 - 1;
        for _ in 0..rounds {
            for (original, &value) in numbers.iter().enumerate() {
                let Some(pos) = order.iter().position(|&i| i == original) else {
                    continue;
                };
                order.remove(pos);
                let target = (pos as i64 + value).rem_euclid(span) as usize;
                order.insert(target, original);
            }
        }
    }
    order.into_iter().map(|i| numbers[i]).collect()
}

fn grove_coordinates(numbers: &[i64], key: i64, rounds: usize) -> Result<String, SolveError> {
    let keyed: Vec<i64> = numbers.iter().map(|&v| v * key).collect();
    let mixed = mix(&keyed, rounds);
    let zero = mixed
        .iter()
        .position(|&v| v == 0)
        .ok_or_else(|| SolveError::failed("no zero in the file"))?;
    let sum: i64 = [1000, 2000, 3000]
        .iter()
        .map(|offset| mixed[(zero + offset) % mixed.len()])
        .sum();
    Ok(sum.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_coordinates(shared, 1, 1)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        grove_coordinates(shared, DECRYPTION_KEY, 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "1\n2\n-3\n3\n-2\n0\n4\n";

    #[test]
    fn one_round() {
        let mixed = mix(&Solver::parse(EXAMPLE).unwrap(), 1);
        let zero = mixed.iter().position(|&v| v == 0).unwrap();
        let from_zero: Vec<i64> = (0..7).map(|k| mixed[(zero + k) % 7]).collect();
        assert_eq!(from_zero, vec![0, 3, -2, 1, 2, -3, 4]);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "3");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "1623178306");
    }
}
