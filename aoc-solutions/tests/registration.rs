//! Every solver in the crate registers itself exactly once

use std::collections::HashSet;

use aoc_solutions as _;
use aoc_solver::{SolverPlugin, SolverRegistryBuilder};

#[test]
fn all_plugins_register_without_duplicates() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("no duplicate solvers")
        .build();
    let plugins = aoc_solver::inventory::iter::<SolverPlugin>().count();
    assert_eq!(registry.storage().len(), plugins);
}

#[test]
fn every_year_has_its_solvers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let per_year = |year: u16| registry.storage().iter_info().filter(|i| i.year == year).count();
    assert_eq!(per_year(2015), 23);
    assert_eq!(per_year(2020), 6);
    assert_eq!(per_year(2021), 16);
    assert_eq!(per_year(2022), 25);
    assert_eq!(per_year(2023), 23);
}

#[test]
fn plugins_carry_their_year_tag() {
    for plugin in aoc_solver::inventory::iter::<SolverPlugin>() {
        let tag = format!("y{}", plugin.year);
        assert!(
            plugin.tags.iter().any(|t| *t == tag),
            "{}/{} is missing tag {}",
            plugin.year,
            plugin.day,
            tag
        );
    }
}

#[test]
fn final_days_have_a_single_part() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let single: HashSet<(u16, u8)> = registry
        .storage()
        .iter_info()
        .filter(|i| i.parts == 1)
        .map(|i| (i.year, i.day))
        .collect();
    assert!(single.contains(&(2022, 25)));
    assert_eq!(registry.storage().get_info(2023, 1).map(|i| i.parts), Some(2));
}

#[test]
fn registered_solver_runs_end_to_end() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert!(solver.solve(3).is_err());
}
