//! Day 7: Camel Cards

use anyhow::{Context, anyhow, bail};
use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classify from the two largest group sizes
    fn from_groups(largest: usize, second: usize) -> Self {
        match (largest, second) {
            (5.., _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPair,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JRule {
    Jack,
    Joker,
}

const CARDS: &str = "23456789TJQKA";

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl Hand {
    fn hand_type(&self, rule: JRule) -> HandType {
        let jokers = match rule {
            JRule::Jack => 0,
            JRule::Joker => self.cards.iter().filter(|&&c| c == b'J').count(),
        };
        let mut groups: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&c| rule == JRule::Jack || c != b'J')
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();
        groups.resize(2, 0);
        // jokers always join the largest group
        HandType::from_groups(groups[0] + jokers, groups[1])
    }

    fn strengths(&self, rule: JRule) -> [usize; 5] {
        self.cards.map(|card| match (card, rule) {
            (b'J', JRule::Joker) => 0,
            _ => CARDS.bytes().position(|c| c == card).map_or(0, |p| p + 1),
        })
    }

    fn sort_key(&self, rule: JRule) -> (HandType, [usize; 5]) {
        (self.hand_type(rule), self.strengths(rule))
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `HAND bid`"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand {cards:?} must have 5 cards"))?;
    if let Some(bad) = cards.iter().find(|c| !CARDS.as_bytes().contains(c)) {
        bail!("unknown card {:?}", *bad as char);
    }
    let bid = bid.trim().parse().context("bid")?;
    Ok(Hand { cards, bid })
}

fn total_winnings(hands: &[Hand], rule: JRule) -> Answer {
    hands
        .iter()
        .map(|hand| (hand.sort_key(rule), hand.bid))
        .sorted_unstable_by(|a, b| a.0.cmp(&b.0))
        .zip(1u64..)
        .map(|((_, bid), rank)| bid * rank)
        .sum::<u64>()
        .into()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_hand(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(total_winnings(shared, JRule::Jack))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(total_winnings(shared, JRule::Joker))
    }
}
