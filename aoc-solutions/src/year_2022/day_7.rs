use std::collections::HashMap;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["y2022", "parsing"])]
pub struct Solver;

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;
const SMALL_DIR: u64 = 100_000;

/// Total size of every directory, keyed by its path components
pub type DirSizes<'a> = HashMap<Vec<&'a str>, u64>;

fn replay<'a>(input: &'a str) -> anyhow::Result<DirSizes<'a>> {
    let mut cwd: Vec<&str> = Vec::new();
    let mut sizes: DirSizes<'a> = HashMap::new();
    sizes.insert(Vec::new(), 0);
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(target) = line.strip_prefix("$ cd ") {
            match target {
                "/" => cwd.clear(),
                ".." => {
                    cwd.pop().ok_or_else(|| anyhow!("cd .. above the root"))?;
                }
                dir => {
                    cwd.push(dir);
                    sizes.entry(cwd.clone()).or_insert(0);
                }
            }
        } else if line == "$ ls" || line.starts_with("dir ") {
            continue;
        } else {
            let (size, _) = line
                .split_once(' ')
                .ok_or_else(|| anyhow!("unrecognised line {:?}", line))?;
            let size: u64 = size.parse().with_context(|| format!("bad file size in {:?}", line))?;
            // Every ancestor directory includes the file
            for depth in 0..=cwd.len() {
                *sizes.entry(cwd[..depth].to_vec()).or_insert(0) += size;
            }
        }
    }
    Ok(sizes)
}

impl AocParser for Solver {
    type SharedData<'a> = DirSizes<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        replay(input).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.values().filter(|&&s| s <= SMALL_DIR).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let used = shared.get(&Vec::<&str>::new()).copied().unwrap_or(0);
        let to_free = (used + NEEDED).saturating_sub(DISK);
        shared
            .values()
            .filter(|&&s| s >= to_free)
            .min()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::failed("no directory is large enough"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn directory_sizes() {
        let sizes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(sizes[&vec!["a", "e"]], 584);
        assert_eq!(sizes[&vec!["a"]], 94853);
        assert_eq!(sizes[&vec!["d"]], 24933642);
        assert_eq!(sizes[&Vec::<&str>::new()], 48381165);
    }

    #[test]
    fn small_directories() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "95437");
    }

    #[test]
    fn directory_to_delete() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "24933642");
    }
}
