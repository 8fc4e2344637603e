//! Day 11: Cosmic Expansion

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["grid", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Image {
    /// `(row, col)` of every galaxy, in reading order
    galaxies: Vec<(u64, u64)>,
}

/// Coordinates after every empty line below them grows to `expansion` lines, sorted
fn expand(coordinates: impl Iterator<Item = u64>, expansion: u64) -> Vec<u64> {
    let mut sorted: Vec<u64> = coordinates.collect();
    sorted.sort_unstable();

    let mut grown = 0;
    let mut previous = None;
    sorted
        .into_iter()
        .map(|coordinate| {
            if let Some(previous) = previous {
                let empty_lines = coordinate.saturating_sub(previous + 1);
                grown += empty_lines * (expansion - 1);
            }
            previous = Some(coordinate);
            coordinate + grown
        })
        .collect()
}

/// Sum of `|a - b|` over all pairs of a sorted slice
fn pairwise_gaps(sorted: &[u64]) -> u64 {
    let mut before = 0;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let gaps = value * i as u64 - before;
            before += value;
            gaps
        })
        .sum()
}

impl Image {
    /// Sum of Manhattan distances over all galaxy pairs.
    ///
    /// Rows and columns separate, so each axis is summed on its own.
    pub fn sum_distances(&self, expansion: u64) -> u64 {
        let rows = expand(self.galaxies.iter().map(|g| g.0), expansion);
        let cols = expand(self.galaxies.iter().map(|g| g.1), expansion);
        pairwise_gaps(&rows) + pairwise_gaps(&cols)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut galaxies = Vec::new();
        for (row, line) in input.lines().enumerate() {
            for (col, cell) in line.trim().chars().enumerate() {
                match cell {
                    '#' => galaxies.push((row as u64, col as u64)),
                    '.' => {}
                    other => {
                        return Err(ParseError::at_line(row + 1, format!("unexpected {other:?}")));
                    }
                }
            }
        }
        Ok(Image { galaxies })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(crate::trace_value!(shared.sum_distances(2)).into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(crate::trace_value!(shared.sum_distances(1_000_000)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 374u64);
    }

    #[test]
    fn test_other_expansions() {
        let image = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(image.sum_distances(10), 1030);
        assert_eq!(image.sum_distances(100), 8410);
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), 82000210u64);
    }

    #[test]
    fn test_pairwise_gaps() {
        assert_eq!(pairwise_gaps(&[1, 4, 6]), 3 + 5 + 2);
        assert_eq!(pairwise_gaps(&[]), 0);
    }

    #[test]
    fn test_expand_grows_gaps_only() {
        assert_eq!(expand([0, 0, 3].into_iter(), 2), vec![0, 0, 5]);
        assert_eq!(expand([5, 2].into_iter(), 10), vec![2, 23]);
    }
}
