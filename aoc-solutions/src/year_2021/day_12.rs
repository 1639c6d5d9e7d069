use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["y2021", "graph", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct Caves<'a> {
    links: HashMap<&'a str, Vec<&'a str>>,
}

fn is_small(cave: &str) -> bool {
    cave.bytes().all(|b| b.is_ascii_lowercase())
}

impl<'a> Caves<'a> {
    fn count_paths(&self, at: &'a str, visited: &mut Vec<&'a str>, spare_visit: bool) -> usize {
        if at == "end" {
            return 1;
        }
        let mut total = 0;
        for &next in self.links.get(at).into_iter().flatten() {
            if next == "start" {
                continue;
            }
            let revisit = is_small(next) && visited.contains(&next);
            if revisit && !spare_visit {
                continue;
            }
            visited.push(next);
            total += self.count_paths(next, visited, spare_visit && !revisit);
            visited.pop();
        }
        total
    }

    pub fn paths(&self, allow_one_revisit: bool) -> usize {
        self.count_paths("start", &mut vec!["start"], allow_one_revisit)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Caves<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut links: HashMap<&str, Vec<&str>> = HashMap::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (a, b) = line
                .split_once('-')
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad link {:?}", line)))?;
            links.entry(a).or_default().push(b);
            links.entry(b).or_default().push(a);
        }
        Ok(Caves { links })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.paths(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.paths(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const SMALL: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";

    const MEDIUM: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    #[test]
    fn small_caves_once() {
        assert_eq!(solve_example::<Solver>(SMALL, 1), "10");
        assert_eq!(solve_example::<Solver>(MEDIUM, 1), "19");
    }

    #[test]
    fn one_small_cave_twice() {
        assert_eq!(solve_example::<Solver>(SMALL, 2), "36");
        assert_eq!(solve_example::<Solver>(MEDIUM, 2), "103");
    }
}
