use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::numbers::extract_unsigned;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 22, tags = ["y2015", "search"])]
pub struct Solver;

const PLAYER_HP: i32 = 50;
const PLAYER_MANA: i32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boss {
    hp: i32,
    damage: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Spell {
    MagicMissile,
    Drain,
    Shield,
    Poison,
    Recharge,
}

impl Spell {
    const ALL: [Spell; 5] = [
        Spell::MagicMissile,
        Spell::Drain,
        Spell::Shield,
        Spell::Poison,
        Spell::Recharge,
    ];

    fn cost(self) -> i32 {
        match self {
            Spell::MagicMissile => 53,
            Spell::Drain => 73,
            Spell::Shield => 113,
            Spell::Poison => 173,
            Spell::Recharge => 229,
        }
    }
}

/// Battle state at the start of a player turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Battle {
    hp: i32,
    mana: i32,
    boss_hp: i32,
    shield: u8,
    poison: u8,
    recharge: u8,
}

impl Battle {
    /// Tick active effects, returning the player's armor for this turn
    fn apply_effects(&mut self) -> i32 {
        let mut armor = 0;
        if self.shield > 0 {
            armor = 7;
            self.shield -= 1;
        }
        if self.poison > 0 {
            self.boss_hp -= 3;
            self.poison -= 1;
        }
        if self.recharge > 0 {
            self.mana += 101;
            self.recharge -= 1;
        }
        armor
    }

    fn cast(&self, spell: Spell) -> Option<Battle> {
        if spell.cost() > self.mana {
            return None;
        }
        let mut next = *self;
        next.mana -= spell.cost();
        match spell {
            Spell::MagicMissile => next.boss_hp -= 4,
            Spell::Drain => {
                next.boss_hp -= 2;
                next.hp += 2;
            }
            Spell::Shield if self.shield == 0 => next.shield = 6,
            Spell::Poison if self.poison == 0 => next.poison = 6,
            Spell::Recharge if self.recharge == 0 => next.recharge = 5,
            _ => return None,
        }
        Some(next)
    }
}

/// Least mana that wins, searching states in order of mana spent
pub fn least_mana(boss: Boss, hp: i32, mana: i32, hard: bool) -> Option<i32> {
    let start = Battle {
        hp,
        mana,
        boss_hp: boss.hp,
        shield: 0,
        poison: 0,
        recharge: 0,
    };
    let mut queue = BinaryHeap::from([Reverse((0, start))]);
    let mut seen = HashSet::new();

    while let Some(Reverse((spent, state))) = queue.pop() {
        if state.boss_hp <= 0 {
            return Some(spent);
        }
        if !seen.insert(state) {
            continue;
        }
        let mut turn = state;
        if hard {
            turn.hp -= 1;
            if turn.hp <= 0 {
                continue;
            }
        }
        turn.apply_effects();
        if turn.boss_hp <= 0 {
            queue.push(Reverse((spent, turn)));
            continue;
        }
        for spell in Spell::ALL {
            let Some(mut next) = turn.cast(spell) else {
                continue;
            };
            let cost = spent + spell.cost();
            if next.boss_hp > 0 {
                let armor = next.apply_effects();
                if next.boss_hp > 0 {
                    next.hp -= (boss.damage - armor).max(1);
                    if next.hp <= 0 {
                        continue;
                    }
                }
            }
            queue.push(Reverse((cost, next)));
        }
    }
    None
}

impl AocParser for Solver {
    type SharedData<'a> = Boss;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        match extract_unsigned::<i32>(input).as_slice() {
            &[hp, damage] => Ok(Boss { hp, damage }),
            _ => Err(ParseError::InvalidFormat(
                "expected boss hit points and damage".into(),
            )),
        }
    }
}

fn answer(boss: Boss, hard: bool) -> Result<String, SolveError> {
    least_mana(boss, PLAYER_HP, PLAYER_MANA, hard)
        .map(|m| m.to_string())
        .ok_or_else(|| SolveError::failed("the boss cannot be beaten"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(*shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(*shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poison_then_missile() {
        let boss = Solver::parse("Hit Points: 13\nDamage: 8").unwrap();
        assert_eq!(least_mana(boss, 10, 250, false), Some(226));
    }

    #[test]
    fn hard_mode_costs_at_least_as_much() {
        let boss = Boss { hp: 14, damage: 8 };
        let normal = least_mana(boss, 10, 250, false).unwrap();
        assert!(least_mana(boss, 10, 250, true).is_none_or(|hard| hard >= normal));
    }

    #[test]
    fn unwinnable_without_mana() {
        let boss = Boss { hp: 50, damage: 10 };
        assert_eq!(least_mana(boss, 10, 52, false), None);
    }
}
