//! Day 3: Gear Ratios

use std::sync::LazyLock;

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid", "regex"])]
pub struct Solver;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number regex"));

/// A run of digits on one row, columns `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    pub value: u64,
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl Number {
    fn is_adjacent(&self, symbol: &Symbol) -> bool {
        self.row.abs_diff(symbol.row) <= 1
            && symbol.col + 1 >= self.start
            && symbol.col <= self.end
    }
}

/// Any cell that is neither a digit nor `.`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub kind: char,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Default)]
pub struct Schematic {
    numbers: Vec<Number>,
    symbols: Vec<Symbol>,
}

impl Schematic {
    fn adjacent_numbers<'s>(&'s self, symbol: &'s Symbol) -> impl Iterator<Item = u64> + 's {
        self.numbers
            .iter()
            .filter(move |number| number.is_adjacent(symbol))
            .map(|number| number.value)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematic = Schematic::default();
        for (row, line) in input.lines().map(str::trim).enumerate() {
            for found in NUMBER_RE.find_iter(line) {
                let value = found
                    .as_str()
                    .parse()
                    .map_err(|e| ParseError::at_line(row + 1, e))?;
                schematic.numbers.push(Number {
                    value,
                    row,
                    start: found.start(),
                    end: found.end(),
                });
            }
            schematic.symbols.extend(
                line.char_indices()
                    .filter(|(_, c)| !c.is_ascii_digit() && *c != '.')
                    .map(|(col, kind)| Symbol { kind, row, col }),
            );
        }
        Ok(schematic)
    }
}

impl PartSolver<1> for Solver {
    /// Sum per symbol, so a number touching two symbols counts twice
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let schematic: &Schematic = shared;
        Ok(schematic
            .symbols
            .iter()
            .flat_map(|symbol| schematic.adjacent_numbers(symbol))
            .sum::<u64>()
            .into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let schematic: &Schematic = shared;
        Ok(schematic
            .symbols
            .iter()
            .filter(|symbol| symbol.kind == '*')
            .filter_map(|gear| {
                let adjacent: Vec<u64> = schematic.adjacent_numbers(gear).collect();
                match adjacent.as_slice() {
                    [a, b] => Some(a * b),
                    _ => None,
                }
            })
            .sum::<u64>()
            .into())
    }
}
