//! Day 2: Cube Conundrum

use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["regex"])]
pub struct Solver;

static GAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game (\d+): (.*)$").expect("valid game regex"));
static CUBES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+) (red|green|blue)").expect("valid cube regex"));

/// Largest number of each colour shown at once in a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    pub red: u64,
    pub green: u64,
    pub blue: u64,
}

impl Cubes {
    fn fits_within(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(&self) -> u64 {
        self.red * self.green * self.blue
    }
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug)]
pub struct Game {
    pub id: u64,
    pub maxima: Cubes,
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let caps = GAME_RE
        .captures(line)
        .ok_or_else(|| anyhow!("expected `Game N: ...`"))?;
    let id = caps[1].parse().context("game id")?;

    let mut maxima = Cubes::default();
    for cube in CUBES_RE.captures_iter(&caps[2]) {
        let count: u64 = cube[1].parse().context("cube count")?;
        let slot = match &cube[2] {
            "red" => &mut maxima.red,
            "green" => &mut maxima.green,
            _ => &mut maxima.blue,
        };
        *slot = (*slot).max(count);
    }
    Ok(Game { id, maxima })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_game(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.maxima.fits_within(&BAG))
            .map(|game| game.id)
            .sum::<u64>()
            .into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        Ok(shared
            .iter()
            .map(|game| game.maxima.power())
            .sum::<u64>()
            .into())
    }
}
