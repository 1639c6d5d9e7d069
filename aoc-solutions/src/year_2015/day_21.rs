use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 21, tags = ["y2015", "search"])]
pub struct Solver;

const PLAYER_HP: i32 = 100;

/// (cost, damage, armor)
type Item = (u32, i32, i32);

const WEAPONS: [Item; 5] = [(8, 4, 0), (10, 5, 0), (25, 6, 0), (40, 7, 0), (74, 8, 0)];
const ARMOR: [Item; 5] = [(13, 0, 1), (31, 0, 2), (53, 0, 3), (75, 0, 4), (102, 0, 5)];
const RINGS: [Item; 6] = [
    (25, 1, 0),
    (50, 2, 0),
    (100, 3, 0),
    (20, 0, 1),
    (40, 0, 2),
    (80, 0, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    hp: i32,
    damage: i32,
    armor: i32,
}

impl AocParser for Solver {
    type SharedData<'a> = Fighter;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        match extract_unsigned::<i32>(input).as_slice() {
            &[hp, damage, armor] => Ok(Fighter { hp, damage, armor }),
            _ => Err(ParseError::InvalidFormat(
                "expected hit points, damage and armor".into(),
            )),
        }
    }
}

/// The player strikes first, so ties in turns-to-kill go to the player
pub fn player_wins(player: Fighter, boss: Fighter) -> bool {
    let turns_to_kill = |attacker: Fighter, defender: Fighter| {
        let hit = (attacker.damage - defender.armor).max(1);
        (defender.hp + hit - 1) / hit
    };
    turns_to_kill(player, boss) <= turns_to_kill(boss, player)
}

/// Every legal loadout as (cost, fighter)
fn loadouts() -> Vec<(u32, Fighter)> {
    let armors: Vec<Vec<Item>> = std::iter::once(vec![])
        .chain(ARMOR.iter().map(|&a| vec![a]))
        .collect();
    let rings: Vec<Vec<Item>> = (0..=2)
        .flat_map(|n| RINGS.iter().copied().combinations(n))
        .collect();
    let mut out = Vec::new();
    for weapon in WEAPONS {
        for armor in &armors {
            for ring_set in &rings {
                let items = std::iter::once(&weapon).chain(armor).chain(ring_set);
                let (cost, damage, defense) = items.fold((0, 0, 0), |acc, item| {
                    (acc.0 + item.0, acc.1 + item.1, acc.2 + item.2)
                });
                out.push((
                    cost,
                    Fighter {
                        hp: PLAYER_HP,
                        damage,
                        armor: defense,
                    },
                ));
            }
        }
    }
    out
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        loadouts()
            .into_iter()
            .filter(|&(_, player)| player_wins(player, *shared))
            .map(|(cost, _)| cost)
            .min()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("no loadout beats the boss"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        loadouts()
            .into_iter()
            .filter(|&(_, player)| !player_wins(player, *shared))
            .map(|(cost, _)| cost)
            .max()
            .map(|c| c.to_string())
            .ok_or_else(|| SolveError::failed("every loadout beats the boss"))
    }
}
