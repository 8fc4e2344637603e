//! Day 1: Trebuchet?!

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["strings"])]
pub struct Solver;

/// Reads the digit spelled at the start of a suffix, if any
pub type DigitExtractor = fn(&str) -> Option<u32>;

const DIGIT_WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

pub fn literal_digit(suffix: &str) -> Option<u32> {
    suffix.chars().next()?.to_digit(10)
}

pub fn literal_or_spelled_digit(suffix: &str) -> Option<u32> {
    literal_digit(suffix).or_else(|| {
        DIGIT_WORDS
            .iter()
            .find(|(word, _)| suffix.starts_with(word))
            .map(|(_, digit)| *digit)
    })
}

/// `10 * first + last`, scanning suffixes from both ends so overlapping
/// words like `twone` yield 2 first and 1 last
pub fn calibration_value(line: &str, extractor: DigitExtractor) -> Option<u32> {
    let suffixes = line.char_indices().map(|(i, _)| &line[i..]);
    let first = suffixes.clone().find_map(extractor)?;
    let last = suffixes.rev().find_map(extractor)?;
    Some(10 * first + last)
}

fn sum_calibration(lines: &[&str], extractor: DigitExtractor) -> Result<Answer, SolveError> {
    lines
        .iter()
        .enumerate()
        .try_fold(0u64, |sum, (idx, line)| {
            calibration_value(line, extractor)
                .map(|value| sum + u64::from(value))
                .ok_or_else(|| format!("(line {}) no digit in {line:?}", idx + 1))
        })
        .map(Answer::from)
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        sum_calibration(shared, literal_digit)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        sum_calibration(shared, literal_or_spelled_digit)
    }
}
