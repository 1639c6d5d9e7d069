use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2020, day = 4, tags = ["y2020", "strings"])]
pub struct Solver;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

pub type Passport<'a> = HashMap<&'a str, &'a str>;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Passport<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| {
                block
                    .split_whitespace()
                    .map(|field| {
                        field.split_once(':').ok_or_else(|| {
                            ParseError::InvalidFormat(format!("field without ':' {:?}", field))
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

fn has_required(passport: &Passport<'_>) -> bool {
    REQUIRED.iter().all(|key| passport.contains_key(key))
}

fn year_in(value: &str, low: u32, high: u32) -> bool {
    value.len() == 4 && value.parse().is_ok_and(|y: u32| (low..=high).contains(&y))
}

fn field_valid(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => {
            let (number, range) = if let Some(cm) = value.strip_suffix("cm") {
                (cm, 150..=193)
            } else if let Some(inches) = value.strip_suffix("in") {
                (inches, 59..=76)
            } else {
                return false;
            };
            number.parse().is_ok_and(|h: u32| range.contains(&h))
        }
        "hcl" => value
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))),
        "ecl" => matches!(value, "amb" | "blu" | "brn" | "gry" | "grn" | "hzl" | "oth"),
        "pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
        _ => true,
    }
}

fn is_valid(passport: &Passport<'_>) -> bool {
    has_required(passport) && passport.iter().all(|(k, v)| field_valid(k, v))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| has_required(p)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|p| is_valid(p)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    const INVALID: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    const VALID: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    #[test]
    fn required_fields() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "2");
    }

    #[test]
    fn field_rules() {
        assert!(field_valid("byr", "2002"));
        assert!(!field_valid("byr", "2003"));
        assert!(field_valid("hgt", "60in"));
        assert!(field_valid("hgt", "190cm"));
        assert!(!field_valid("hgt", "190in"));
        assert!(!field_valid("hgt", "190"));
        assert!(field_valid("hcl", "#123abc"));
        assert!(!field_valid("hcl", "#123abz"));
        assert!(!field_valid("hcl", "123abc"));
        assert!(field_valid("ecl", "brn"));
        assert!(!field_valid("ecl", "wat"));
        assert!(field_valid("pid", "000000001"));
        assert!(!field_valid("pid", "0123456789"));
    }

    #[test]
    fn validated_passports() {
        assert_eq!(solve_example::<Solver>(INVALID, 2), "0");
        assert_eq!(solve_example::<Solver>(VALID, 2), "4");
    }
}
