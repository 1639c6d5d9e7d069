use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use serde_json::Value;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 12, tags = ["y2015", "json"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Value;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        serde_json::from_str(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Sum of every number in the document, skipping objects rejected by `skip`
fn sum_numbers<F>(value: &Value, skip: &F) -> i64
where
    F: Fn(&serde_json::Map<String, Value>) -> bool,
{
    match value {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::Array(items) => items.iter().map(|v| sum_numbers(v, skip)).sum(),
        Value::Object(map) if skip(map) => 0,
        Value::Object(map) => map.values().map(|v| sum_numbers(v, skip)).sum(),
        _ => 0,
    }
}

fn has_red(map: &serde_json::Map<String, Value>) -> bool {
    map.values().any(|v| v.as_str() == Some("red"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &|_| false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_numbers(shared, &has_red).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn all_numbers() {
        assert_eq!(solve_example::<Solver>("[1,2,3]", 1), "6");
        assert_eq!(solve_example::<Solver>(r#"{"a":2,"b":4}"#, 1), "6");
        assert_eq!(solve_example::<Solver>(r#"{"a":[-1,1]}"#, 1), "0");
        assert_eq!(solve_example::<Solver>("[]", 1), "0");
    }

    #[test]
    fn ignoring_red_objects() {
        assert_eq!(solve_example::<Solver>("[1,2,3]", 2), "6");
        assert_eq!(solve_example::<Solver>(r#"[1,{"c":"red","b":2},3]"#, 2), "4");
        assert_eq!(solve_example::<Solver>(r#"{"d":"red","e":[1,2,3,4],"f":5}"#, 2), "0");
        assert_eq!(solve_example::<Solver>(r#"[1,"red",5]"#, 2), "6");
    }
}
