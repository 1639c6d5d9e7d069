use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["y2023", "sorting"])]
pub struct Solver;

const CARDS: &[u8] = b"23456789TJQKA";
const JOKER: u8 = 9;

#[derive(Debug, Clone)]
pub struct Hand {
    /// Card strengths, `2` being 0 and `A` 12
    cards: [u8; 5],
    bid: u64,
}

/// Hand types, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    Three,
    FullHouse,
    Four,
    Five,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|line| -> anyhow::Result<Hand> {
                let (cards, bid) = line
                    .split_once(' ')
                    .ok_or_else(|| anyhow!("bad hand {:?}", line))?;
                let strengths = cards
                    .bytes()
                    .map(|c| CARDS.iter().position(|&k| k == c).map(|p| p as u8))
                    .collect::<Option<Vec<u8>>>()
                    .ok_or_else(|| anyhow!("unknown card in {:?}", cards))?;
                Ok(Hand {
                    cards: strengths
                        .try_into()
                        .map_err(|_| anyhow!("hand {:?} needs five cards", cards))?,
                    bid: bid.trim().parse().context("bid")?,
                })
            })
            .collect::<anyhow::Result<_>>()
            .map_err(invalid_format)
    }
}

/// Type of the hand; with `jokers`, each `J` joins the largest group
pub fn kind(cards: &[u8; 5], jokers: bool) -> Kind {
    let mut counts = [0u8; 13];
    let mut wild = 0;
    for &c in cards {
        if jokers && c == JOKER {
            wild += 1;
        } else {
            counts[c as usize] += 1;
        }
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));
    match (counts[0] + wild, counts[1]) {
        (5, _) => Kind::Five,
        (4, _) => Kind::Four,
        (3, 2) => Kind::FullHouse,
        (3, _) => Kind::Three,
        (2, 2) => Kind::TwoPair,
        (2, _) => Kind::OnePair,
        _ => Kind::HighCard,
    }
}

fn winnings(hands: &[Hand], jokers: bool) -> u64 {
    // A joker is the weakest card when breaking ties
    let tiebreak = |c: u8| match c {
        JOKER if jokers => 0,
        c if jokers && c < JOKER => c + 1,
        c => c,
    };
    let mut ranked: Vec<(Kind, [u8; 5], u64)> = hands
        .iter()
        .map(|h| (kind(&h.cards, jokers), h.cards.map(tiebreak), h.bid))
        .collect();
    ranked.sort_unstable();
    ranked
        .iter()
        .zip(1..)
        .map(|(&(_, _, bid), rank)| bid * rank)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(winnings(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    const EXAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483\n";

    fn hand(text: &str) -> [u8; 5] {
        Solver::parse(&format!("{} 1", text)).unwrap()[0].cards
    }

    #[test]
    fn kinds() {
        assert_eq!(kind(&hand("KTJJT"), false), Kind::TwoPair);
        assert_eq!(kind(&hand("KTJJT"), true), Kind::Four);
        assert_eq!(kind(&hand("JJJJJ"), true), Kind::Five);
        assert_eq!(kind(&hand("23432"), false), Kind::TwoPair);
        assert_eq!(kind(&hand("23456"), true), Kind::HighCard);
    }

    #[test]
    fn example() {
        assert_eq!(solve_example::<Solver>(EXAMPLE, 1), "6440");
        assert_eq!(solve_example::<Solver>(EXAMPLE, 2), "5905");
    }
}
