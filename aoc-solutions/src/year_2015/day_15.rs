use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::extract_numbers;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 15, tags = ["y2015", "search"])]
pub struct Solver;

const TEASPOONS: i64 = 100;
const CALORIE_TARGET: i64 = 500;

/// capacity, durability, flavor, texture, calories
pub type Ingredient = [i64; 5];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Ingredient>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| {
                extract_numbers::<i64>(line)
                    .try_into()
                    .map_err(|_| anyhow!("expected five properties in {:?}", line))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Every way to split `total` teaspoons between `n` ingredients
fn compositions(n: usize, total: i64, prefix: &mut Vec<i64>, out: &mut dyn FnMut(&[i64])) {
    if n == 1 {
        prefix.push(total);
        out(prefix);
        prefix.pop();
        return;
    }
    for amount in 0..=total {
        prefix.push(amount);
        compositions(n - 1, total - amount, prefix, out);
        prefix.pop();
    }
}

fn score(ingredients: &[Ingredient], amounts: &[i64]) -> (i64, i64) {
    let mut totals = [0i64; 5];
    for (ingredient, &amount) in ingredients.iter().zip(amounts) {
        for (total, property) in totals.iter_mut().zip(ingredient) {
            *total += property * amount;
        }
    }
    let score = totals[..4].iter().map(|&t| t.max(0)).product();
    (score, totals[4])
}

/// Highest cookie score, optionally only over recipes with exactly `calories`
pub fn best_score(ingredients: &[Ingredient], calories: Option<i64>) -> i64 {
    if ingredients.is_empty() {
        return 0;
    }
    let mut best = 0;
    compositions(ingredients.len(), TEASPOONS, &mut Vec::new(), &mut |amounts: &[i64]| {
        let (value, cal) = score(ingredients, amounts);
        if calories.is_none_or(|target| target == cal) {
            best = best.max(value);
        }
    });
    best
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_score(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_score(shared, Some(CALORIE_TARGET)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3
";

    #[test]
    fn best_cookie() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "62842880");
    }

    #[test]
    fn best_cookie_at_500_calories() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "57600000");
    }
}
