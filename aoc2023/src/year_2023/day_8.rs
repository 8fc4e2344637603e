//! Day 8: Haunted Wasteland

use std::collections::HashMap;
use std::sync::LazyLock;

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::line_stream::LineStream;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "math"])]
pub struct Solver;

static NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Z]{3}) = \(([0-9A-Z]{3}), ([0-9A-Z]{3})\)$").expect("valid node regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug)]
pub struct Network<'a> {
    directions: Vec<Direction>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> Network<'a> {
    /// Steps from `start` until `stop` holds, following the directions cyclically.
    ///
    /// The walk is a function of `(node, direction index)`, so once it has taken
    /// more steps than there are such states without stopping it is looping.
    pub fn count_steps(
        &self,
        start: &'a str,
        stop: impl Fn(&str) -> bool,
    ) -> Result<u64, SolveError> {
        let states = (self.directions.len() * self.nodes.len()) as u64;
        let mut current = start;
        let mut steps = 0u64;
        for direction in self.directions.iter().cycle() {
            if stop(current) {
                return Ok(steps);
            }
            if steps > states {
                return Err(SolveError::SolveFailed(
                    format!("no stop node reachable from {start}").into(),
                ));
            }
            let &(left, right) = self
                .nodes
                .get(current)
                .ok_or_else(|| SolveError::SolveFailed(format!("unknown node {current}").into()))?;
            current = match direction {
                Direction::Left => left,
                Direction::Right => right,
            };
            steps += 1;
        }
        Err(SolveError::SolveFailed("no directions".into()))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut stream = LineStream::new(input);
        let directions = stream
            .next_line()?
            .trim()
            .chars()
            .map(|c| match c {
                'L' => Ok(Direction::Left),
                'R' => Ok(Direction::Right),
                other => Err(ParseError::at_line(1, format!("bad direction {other:?}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if directions.is_empty() {
            return Err(ParseError::MissingData("no directions".into()));
        }

        stream.skip_empty();
        let mut nodes = HashMap::new();
        while let Some(line) = stream.next() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (_, [node, left, right]) = NODE_RE
                .captures(line)
                .ok_or_else(|| ParseError::at_line(stream.line_number(), "expected `AAA = (BBB, CCC)`"))?
                .extract();
            nodes.insert(node, (left, right));
        }
        tracing::debug!(directions = directions.len(), nodes = nodes.len(), "parsed network");

        Ok(Network { directions, nodes })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared.count_steps("AAA", |node| node == "ZZZ")?.into())
    }
}

impl PartSolver<2> for Solver {
    /// Each ghost loops with a period equal to its first arrival, so they all
    /// meet after the least common multiple of those arrivals
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let mut starts: Vec<&str> = shared
            .nodes
            .keys()
            .copied()
            .filter(|node| node.ends_with('A'))
            .collect();
        starts.sort_unstable();
        if starts.is_empty() {
            return Err(SolveError::SolveFailed("no `..A` start nodes".into()));
        }

        let mut period = 1u64;
        for start in starts {
            let steps = shared.count_steps(start, |node| node.ends_with('Z'))?;
            tracing::debug!(start, steps, "cycle length");
            period = num_integer::lcm(period, steps);
        }
        Ok(period.into())
    }
}
