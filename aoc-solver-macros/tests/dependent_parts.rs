use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug)]
struct Elves {
    calories: Vec<u32>,
    sorted: bool,
}

/// Part 1 sorts the totals in place; part 2 relies on that order when present
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CalorieCounting;

impl AocParser for CalorieCounting {
    type SharedData<'a> = Elves;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let calories = input
            .split("\n\n")
            .map(|block| {
                block
                    .lines()
                    .map(|l| {
                        l.trim()
                            .parse::<u32>()
                            .map_err(|_| ParseError::InvalidFormat(format!("bad calories: {}", l)))
                    })
                    .sum::<Result<u32, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Elves {
            calories,
            sorted: false,
        })
    }
}

impl PartSolver<1> for CalorieCounting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.calories.sort_unstable_by(|a, b| b.cmp(a));
        shared.sorted = true;
        shared
            .calories
            .first()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("no elves"))
    }
}

impl PartSolver<2> for CalorieCounting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if !shared.sorted {
            shared.calories.sort_unstable_by(|a, b| b.cmp(a));
            shared.sorted = true;
        }
        Ok(shared.calories.iter().take(3).sum::<u32>().to_string())
    }
}

const INPUT: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000";

#[test]
fn part1_sorts_shared_data() {
    let mut shared = <CalorieCounting as AocParser>::parse(INPUT).unwrap();
    assert_eq!(<CalorieCounting as Solver>::solve_part(&mut shared, 1).unwrap(), "24000");
    assert!(shared.sorted);
    assert_eq!(shared.calories[0], 24000);
}

#[test]
fn part2_after_part1() {
    let mut shared = <CalorieCounting as AocParser>::parse(INPUT).unwrap();
    <CalorieCounting as Solver>::solve_part(&mut shared, 1).unwrap();
    assert_eq!(<CalorieCounting as Solver>::solve_part(&mut shared, 2).unwrap(), "45000");
}

#[test]
fn part2_alone() {
    let mut shared = <CalorieCounting as AocParser>::parse(INPUT).unwrap();
    assert_eq!(<CalorieCounting as Solver>::solve_part(&mut shared, 2).unwrap(), "45000");
}

#[test]
fn bad_input_is_a_parse_error() {
    let result = <CalorieCounting as AocParser>::parse("12\nabc");
    assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
}
