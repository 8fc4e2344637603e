//! Day 9: Mirage Maintenance

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["sequences"])]
pub struct Solver;

/// Next value of the sequence, found by repeated differencing.
///
/// The extrapolated value is the sum of the last element of every difference
/// row down to the all-zero row.
pub fn extrapolate(values: &[i64]) -> i64 {
    let mut row = values.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        next += row[row.len() - 1];
        row = row.iter().tuple_windows().map(|(a, b)| b - a).collect();
    }
    next
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(|n| n.parse().map_err(|e| ParseError::at_line(idx + 1, e)))
                    .collect()
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|values| extrapolate(values))
            .sum::<i64>()
            .into())
    }
}

impl PartSolver<2> for Solver {
    /// Extrapolating backwards is extrapolating the reversed sequence forwards
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|values| {
                let reversed: Vec<i64> = values.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum::<i64>()
            .into())
    }
}
