//! Day 4: Scratchcards

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["regex", "sets"])]
pub struct Solver;

static CARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Card +(\d+): ([\d ]*)\|([\d ]*)$").expect("valid card regex")
});

fn parse_numbers(list: &str) -> anyhow::Result<HashSet<u32>> {
    list.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
        .collect()
}

/// Number of own numbers that are also winning numbers
fn parse_matches(line: &str) -> anyhow::Result<usize> {
    let caps = CARD_RE
        .captures(line)
        .ok_or_else(|| anyhow!("expected `Card N: winning | own`"))?;
    let winning = parse_numbers(&caps[2])?;
    let own = parse_numbers(&caps[3])?;
    Ok(winning.intersection(&own).count())
}

impl AocParser for Solver {
    /// Match count per card, in card order
    type SharedData<'a> = Vec<usize>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_matches(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|&&matches| matches > 0)
            .map(|&matches| 1u64 << (matches - 1))
            .sum::<u64>()
            .into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (card, &matches) in shared.iter().enumerate() {
            let won = copies[card];
            // copies never run past the last card
            let last = (card + matches).min(shared.len() - 1);
            for next in &mut copies[card + 1..=last] {
                *next += won;
            }
        }
        Ok(copies.iter().sum::<u64>().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 13u64);
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), 30u64);
    }

    #[test]
    fn test_copies_stop_at_last_card() {
        let mut shared = vec![0, 3];
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), 2u64);
    }
}
