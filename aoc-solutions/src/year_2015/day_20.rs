use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["y2015", "math"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = u64;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("expected a number, got {:?}", input.trim())))
    }
}

/// First house receiving at least `target` presents when elf `e` leaves
/// `per_elf * e` presents at each of its first `visits` multiples
pub fn first_house(target: u64, per_elf: u64, visits: Option<usize>) -> usize {
    // House n always gets at least per_elf * n from its own elf
    let limit = (target / per_elf) as usize + 1;
    let mut presents = vec![0u64; limit + 1];
    for elf in 1..=limit {
        let houses = (elf..=limit).step_by(elf);
        let houses: Box<dyn Iterator<Item = usize>> = match visits {
            Some(n) => Box::new(houses.take(n)),
            None => Box::new(houses),
        };
        for house in houses {
            presents[house] += per_elf * elf as u64;
        }
    }
    presents
        .iter()
        .position(|&p| p >= target)
        .unwrap_or(limit)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, 10, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(first_house(*shared, 11, Some(50)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_elves() {
        assert_eq!(first_house(70, 10, None), 4);
        assert_eq!(first_house(130, 10, None), 8);
    }

    #[test]
    fn lazy_elves() {
        assert_eq!(first_house(100, 11, Some(50)), 6);
        // Elf 1 stops after house 2, so house 3 only gets elf 3
        assert_eq!(first_house(40, 11, Some(2)), 4);
    }
}
