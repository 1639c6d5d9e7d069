//! Registry storage and lookup tests

use aoc_solver::{
    AocParser, AocSolver, ParseError, PartSolver, RegistrationError, SolveError, SolverError,
    SolverRegistryBuilder, calc_index, from_index,
};
use proptest::prelude::*;

/// Borrows the input: part 1 echoes the first line
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct FirstLine;

impl AocParser for FirstLine {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .next()
            .ok_or_else(|| ParseError::MissingData("empty input".into()))
    }
}

impl PartSolver<1> for FirstLine {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

proptest! {
    #[test]
    fn index_round_trips_for_supported_keys(year in 2015u16..2035, day in 1u8..=25) {
        let index = calc_index(year, day).unwrap();
        prop_assert_eq!(from_index(index), (year, day));
    }

    #[test]
    fn unsupported_days_have_no_index(year in 2015u16..2035, day in prop_oneof![Just(0u8), 26u8..=255]) {
        prop_assert!(calc_index(year, day).is_none());
    }
}

#[test]
fn years_outside_range_have_no_index() {
    assert!(calc_index(2014, 1).is_none());
    assert!(calc_index(2035, 1).is_none());
}

#[test]
fn create_solver_parses_once_and_answers() {
    let registry = SolverRegistryBuilder::new()
        .register::<FirstLine>(2020, 3)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2020, 3, "abc\ndef").unwrap();
    assert_eq!(solver.year(), 2020);
    assert_eq!(solver.day(), 3);
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "abc");
    assert!(matches!(solver.solve(2), Err(SolveError::PartOutOfRange(2))));
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = SolverRegistryBuilder::new()
        .register::<FirstLine>(2021, 1)
        .unwrap()
        .register::<FirstLine>(2021, 1);
    assert!(matches!(result, Err(RegistrationError::DuplicateSolver(2021, 1))));
}

#[test]
fn out_of_range_registration_is_rejected() {
    let result = SolverRegistryBuilder::new().register::<FirstLine>(2014, 1);
    assert!(matches!(result, Err(RegistrationError::InvalidYearDay(2014, 1))));
}

#[test]
fn lookup_errors_are_distinguished() {
    let registry = SolverRegistryBuilder::new()
        .register::<FirstLine>(2022, 5)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2022, 6, "x"),
        Err(SolverError::NotFound(2022, 6))
    ));
    assert!(matches!(
        registry.create_solver(2022, 30, "x"),
        Err(SolverError::InvalidYearDay(2022, 30))
    ));
    assert!(matches!(
        registry.create_solver(2022, 5, ""),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn storage_iterates_in_year_day_order() {
    let registry = SolverRegistryBuilder::new()
        .register::<FirstLine>(2023, 2)
        .unwrap()
        .register::<FirstLine>(2015, 20)
        .unwrap()
        .register::<FirstLine>(2023, 1)
        .unwrap()
        .build();

    let keys: Vec<_> = registry
        .storage()
        .iter_info()
        .map(|info| (info.year, info.day))
        .collect();
    assert_eq!(keys, vec![(2015, 20), (2023, 1), (2023, 2)]);
    assert_eq!(registry.storage().len(), 3);
    assert!(registry.storage().contains(2015, 20));
    assert_eq!(registry.storage().get_info(2023, 1).map(|i| i.parts), Some(1));
}
