//! Day 10: Pipe Maze

use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["grid"])]
pub struct Solver;

const NORTH: u8 = 0b0001;
const EAST: u8 = 0b0010;
const SOUTH: u8 = 0b0100;
const WEST: u8 = 0b1000;

const ALL_SIDES: [u8; 4] = [NORTH, EAST, SOUTH, WEST];

/// Sides a tile connects to
fn connections(tile: u8) -> u8 {
    match tile {
        b'|' => NORTH | SOUTH,
        b'-' => EAST | WEST,
        b'L' => NORTH | EAST,
        b'J' => NORTH | WEST,
        b'7' => SOUTH | WEST,
        b'F' => SOUTH | EAST,
        _ => 0,
    }
}

fn opposite(side: u8) -> u8 {
    match side {
        NORTH => SOUTH,
        SOUTH => NORTH,
        EAST => WEST,
        _ => EAST,
    }
}

#[derive(Debug)]
pub struct Maze {
    rows: Vec<Vec<u8>>,
    start: (usize, usize),
    /// Sides the start tile connects to, inferred from its neighbours
    start_connections: u8,
}

impl Maze {
    fn step(&self, (row, col): (usize, usize), side: u8) -> Option<(usize, usize)> {
        let next = match side {
            NORTH => (row.checked_sub(1)?, col),
            SOUTH => (row + 1, col),
            EAST => (row, col + 1),
            _ => (row, col.checked_sub(1)?),
        };
        self.rows.get(next.0)?.get(next.1)?;
        Some(next)
    }

    fn connections_at(&self, (row, col): (usize, usize)) -> u8 {
        if (row, col) == self.start {
            self.start_connections
        } else {
            connections(self.rows[row][col])
        }
    }

    /// Mask of the tiles on the loop through the start, plus its length
    fn find_loop(&self) -> Result<(Vec<Vec<bool>>, usize), SolveError> {
        let mut on_loop: Vec<Vec<bool>> = self.rows.iter().map(|r| vec![false; r.len()]).collect();
        let mut position = self.start;
        let mut heading = ALL_SIDES
            .into_iter()
            .find(|side| self.start_connections & side != 0)
            .ok_or_else(|| SolveError::SolveFailed("start connects nowhere".into()))?;
        let mut length = 0;

        loop {
            on_loop[position.0][position.1] = true;
            length += 1;
            position = self
                .step(position, heading)
                .ok_or_else(|| SolveError::SolveFailed("loop leaves the grid".into()))?;
            if position == self.start {
                if self.start_connections & opposite(heading) == 0 {
                    return Err(SolveError::SolveFailed(
                        "loop returns to the start from an unconnected side".into(),
                    ));
                }
                break;
            }
            let exits = self.connections_at(position) & !opposite(heading);
            if self.connections_at(position) & opposite(heading) == 0 || exits == 0 {
                return Err(SolveError::SolveFailed(
                    format!("pipe at {position:?} breaks the loop").into(),
                ));
            }
            heading = exits;
        }
        tracing::debug!(length, "loop closed");
        Ok((on_loop, length))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Maze;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<Vec<u8>> = input
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .filter(|row| !row.is_empty())
            .collect();
        let start = rows
            .iter()
            .enumerate()
            .find_map(|(r, row)| row.iter().position(|&c| c == b'S').map(|c| (r, c)))
            .ok_or_else(|| ParseError::MissingData("no start tile `S`".into()))?;

        let mut maze = Maze {
            rows,
            start,
            start_connections: 0,
        };
        // neighbours pointing back at the start, in the order pairs are tried
        let candidates: Vec<u8> = [NORTH, SOUTH, EAST, WEST]
            .into_iter()
            .filter(|&side| {
                maze.step(start, side).is_some_and(|(r, c)| {
                    connections(maze.rows[r][c]) & opposite(side) != 0
                })
            })
            .collect();
        match candidates.len() {
            0 | 1 => {
                return Err(ParseError::InvalidFormat(format!(
                    "start tile has {} connecting neighbours, expected at least 2",
                    candidates.len()
                )));
            }
            2 => maze.start_connections = candidates[0] | candidates[1],
            _ => {
                // stray pipes also point at the start; keep the first pair that closes a loop
                let pairs = candidates.iter().enumerate().flat_map(|(i, &first)| {
                    candidates[i + 1..].iter().map(move |&second| first | second)
                });
                let mut closing = None;
                for pair in pairs {
                    maze.start_connections = pair;
                    if maze.find_loop().is_ok() {
                        closing = Some(pair);
                        break;
                    }
                }
                maze.start_connections = closing.ok_or_else(|| {
                    ParseError::InvalidFormat(
                        "no two neighbours of the start tile close a loop".into(),
                    )
                })?;
            }
        }

        Ok(maze)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let (_, length) = shared.find_loop()?;
        Ok((length / 2).into())
    }
}

impl PartSolver<2> for Solver {
    /// Scanning a row, every loop tile with a northern connection flips
    /// between outside and inside
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let (on_loop, _) = shared.find_loop()?;
        let mut enclosed = 0usize;
        for (r, row) in on_loop.iter().enumerate() {
            let mut inside = false;
            for (c, &is_loop) in row.iter().enumerate() {
                if is_loop {
                    if shared.connections_at((r, c)) & NORTH != 0 {
                        inside = !inside;
                    }
                } else if inside {
                    enclosed += 1;
                }
            }
        }
        Ok(enclosed.into())
    }
}
