use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

/// Counts characters and words of the input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 25, tags = ["test", "text"])]
pub struct WordCount;

impl AocParser for WordCount {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().count().to_string())
    }
}

impl PartSolver<2> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.split_whitespace().count().to_string())
    }
}

/// Registered without tags
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2034, day = 24)]
pub struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn plugins_are_collected() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without duplicates")
        .build();

    let mut solver = registry
        .create_solver(2034, 25, "two words\n")
        .expect("solver was registered by the derive");
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "9");
    assert_eq!(solver.solve(2).unwrap().answer, "2");

    let mut lines = registry.create_solver(2034, 24, "a\nb\nc").unwrap();
    assert_eq!(lines.solve(1).unwrap().answer, "3");
}

#[test]
fn tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"text"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2034, 25));
    assert!(!registry.storage().contains(2034, 24));
}
