//! Day 5: If You Give A Seed A Fertilizer

use std::sync::LazyLock;

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::interval::{Pipeline, Range, RangeSet, ShiftMap, find_lowest};
use crate::utils::line_stream::LineStream;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges"])]
pub struct Solver;

static SEEDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^seeds:((?: +\d+)*)$").expect("valid seeds regex"));
static MAPPING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) (\d+) (\d+)$").expect("valid mapping regex"));

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<i64>,
    pipeline: Pipeline,
}

fn parse_seeds(line: &str, line_number: usize) -> Result<Vec<i64>, ParseError> {
    let caps = SEEDS_RE
        .captures(line)
        .ok_or_else(|| ParseError::at_line(line_number, "expected `seeds: ...`"))?;
    caps[1]
        .split_whitespace()
        .map(|n| n.parse().map_err(|e| ParseError::at_line(line_number, e)))
        .collect()
}

/// One `x-to-y map:` section, from its header up to a blank line or end of input
fn parse_map(stream: &mut LineStream<'_>) -> Result<ShiftMap, ParseError> {
    let header = stream.next_line()?;
    if !header.trim_end().ends_with("map:") {
        return Err(ParseError::at_line(stream.line_number(), "expected a map header"));
    }

    let mut map = ShiftMap::new();
    while let Some(line) = stream.next() {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let caps = MAPPING_RE.captures(line).ok_or_else(|| {
            ParseError::at_line(stream.line_number(), "expected `destination source length`")
        })?;
        let [destination, source, length] = [&caps[1], &caps[2], &caps[3]].map(str::parse::<i64>);
        let at = stream.line_number();
        map.add_mapping(
            destination.map_err(|e| ParseError::at_line(at, e))?,
            source.map_err(|e| ParseError::at_line(at, e))?,
            length.map_err(|e| ParseError::at_line(at, e))?,
        );
    }
    Ok(map)
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut stream = LineStream::new(input);
        let seeds = parse_seeds(stream.next_line()?.trim(), stream.line_number())?;

        let mut pipeline = Pipeline::new();
        stream.skip_empty();
        while stream.is_active() {
            pipeline.push(parse_map(&mut stream)?);
            stream.skip_empty();
        }
        tracing::debug!(seeds = seeds.len(), maps = pipeline.len(), "parsed almanac");

        Ok(Almanac { seeds, pipeline })
    }
}

fn lowest_location(seeds: RangeSet, pipeline: &Pipeline) -> Result<Answer, SolveError> {
    find_lowest(&seeds, pipeline)
        .map(Answer::from)
        .ok_or_else(|| SolveError::SolveFailed("no seed reaches a location".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let seeds = shared.seeds.iter().copied().map(Range::single).collect();
        lowest_location(seeds, &shared.pipeline)
    }
}

impl PartSolver<2> for Solver {
    /// Seeds come in `start length` pairs
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::SolveFailed(
                "seed ranges need an even number of values".into(),
            ));
        }
        let seeds = shared
            .seeds
            .chunks_exact(2)
            .filter_map(|pair| Range::from_start_len(pair[0], pair[1]))
            .collect();
        lowest_location(seeds, &shared.pipeline)
    }
}
