//! Day 6: Wait For It

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::line_stream::LineStream;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub distance: u64,
}

/// Number of hold times `h` in `0..=time` with `h * (time - h) > distance`.
///
/// The winning holds form one interval around `time / 2`; its lower end is
/// estimated from the quadratic roots and then nudged onto the first integer
/// that beats the record.
pub fn winning_holds(race: Race) -> u64 {
    let time = u128::from(race.time);
    let distance = u128::from(race.distance);
    let travelled = |hold: u128| hold * (time - hold);

    let Some(discriminant) = (time * time).checked_sub(4 * distance) else {
        return 0;
    };
    let mut low = (time - discriminant.isqrt()) / 2;
    while low <= time / 2 && travelled(low) <= distance {
        low += 1;
    }
    while low > 0 && travelled(low - 1) > distance {
        low -= 1;
    }
    if low > time / 2 {
        return 0;
    }
    let high = time - low;
    (high - low + 1) as u64
}

fn parse_row<'a>(stream: &mut LineStream<'a>, label: &str) -> Result<&'a str, ParseError> {
    let line = stream.next_line()?;
    line.trim()
        .strip_prefix(label)
        .ok_or_else(|| ParseError::at_line(stream.line_number(), format!("expected `{label}`")))
}

fn numbers(row: &str) -> Result<Vec<u64>, ParseError> {
    row.split_whitespace()
        .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(format!("bad number {n:?}"))))
        .collect()
}

/// All digits of a row read as one number, ignoring the spacing
fn joined_number(row: &str) -> Result<u64, ParseError> {
    row.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("bad number in {row:?}")))
}

#[derive(Debug)]
pub struct SharedData {
    races: Vec<Race>,
    /// The single long race read by ignoring the column spacing
    joined: Race,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut stream = LineStream::new(input);
        let times = parse_row(&mut stream, "Time:")?;
        let distances = parse_row(&mut stream, "Distance:")?;

        let (race_times, race_distances) = (numbers(times)?, numbers(distances)?);
        if race_times.len() != race_distances.len() {
            return Err(ParseError::InvalidFormat(format!(
                "{} times but {} distances",
                race_times.len(),
                race_distances.len()
            )));
        }
        let races = race_times
            .into_iter()
            .zip(race_distances)
            .map(|(time, distance)| Race { time, distance })
            .collect();
        let joined = Race {
            time: joined_number(times)?,
            distance: joined_number(distances)?,
        };

        Ok(SharedData { races, joined })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .races
            .iter()
            .map(|race| winning_holds(*race))
            .product::<u64>()
            .into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(winning_holds(shared.joined).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Time:      7  15   30
Distance:  9  40  200";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 288u64);
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), 71503u64);
    }

    #[test]
    fn test_winning_holds() {
        assert_eq!(winning_holds(Race { time: 7, distance: 9 }), 4);
        assert_eq!(winning_holds(Race { time: 15, distance: 40 }), 8);
        // record equals the best possible distance: nothing beats it
        assert_eq!(winning_holds(Race { time: 30, distance: 225 }), 0);
        assert_eq!(winning_holds(Race { time: 30, distance: 224 }), 1);
        assert_eq!(winning_holds(Race { time: 3, distance: 100 }), 0);
    }

    #[test]
    fn test_winning_holds_matches_brute_force() {
        for time in 0..40u64 {
            for distance in 0..(time * time / 4 + 2) {
                let brute = (0..=time).filter(|h| h * (time - h) > distance).count() as u64;
                assert_eq!(winning_holds(Race { time, distance }), brute, "t={time} d={distance}");
            }
        }
    }

    #[test]
    fn test_mismatched_rows() {
        assert!(matches!(
            Solver::parse("Time: 7 15\nDistance: 9"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_missing_distance_row() {
        assert!(matches!(
            Solver::parse("Time: 7"),
            Err(ParseError::MissingData(_))
        ));
    }
}
