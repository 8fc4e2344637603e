//! Day 12: Hot Springs

use anyhow::{Context, anyhow};
use aoc_solver::{Answer, AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use crate::utils::dp_cache::{DpCache, DpCacheError, DpProblem, Vec2DBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["dp"])]
pub struct Solver;

const UNFOLD_COPIES: usize = 5;

/// One row of springs: `#` damaged, `.` operational, `?` unknown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pattern: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    /// Pattern copies joined by `?`, groups repeated
    fn unfold(&self, copies: usize) -> Record {
        let pattern = std::iter::repeat_n(self.pattern.as_slice(), copies)
            .collect::<Vec<_>>()
            .join(&b'?');
        Record {
            pattern,
            groups: self.groups.repeat(copies),
        }
    }
}

/// Placement state `(group, offset)`: group `group` covers `[offset, offset + len)`.
///
/// The value is the number of ways to place the remaining groups after it.
/// Prefix counts answer "any `#` / `.` in a span" in constant time.
struct Arrangements<'r> {
    record: &'r Record,
    damaged_before: Vec<usize>,
    operational_before: Vec<usize>,
}

impl<'r> Arrangements<'r> {
    fn new(record: &'r Record) -> Self {
        let prefix = |cell: u8| -> Vec<usize> {
            std::iter::once(0)
                .chain(record.pattern.iter().scan(0, move |count, &c| {
                    *count += usize::from(c == cell);
                    Some(*count)
                }))
                .collect()
        };
        Self {
            record,
            damaged_before: prefix(b'#'),
            operational_before: prefix(b'.'),
        }
    }

    fn len(&self) -> usize {
        self.record.pattern.len()
    }

    fn any_damaged(&self, start: usize, end: usize) -> bool {
        self.damaged_before[end] > self.damaged_before[start]
    }

    fn any_operational(&self, start: usize, end: usize) -> bool {
        self.operational_before[end] > self.operational_before[start]
    }

    /// Group fits on `[offset, offset + len)` and the cell after it can be a gap
    fn fits(&self, group: usize, offset: usize) -> bool {
        let end = offset + self.record.groups[group];
        end <= self.len()
            && !self.any_operational(offset, end)
            && (end == self.len() || self.record.pattern[end] != b'#')
    }

    /// Number of arrangements of the whole record
    fn count(&self) -> Result<u64, DpCacheError> {
        let Some(&first) = self.record.groups.first() else {
            return Ok(0);
        };
        let Some(last_offset) = self.len().checked_sub(first) else {
            return Ok(0);
        };

        let cache = DpCache::builder()
            .backend(Vec2DBackend::new(self.record.groups.len(), self.len() + 1))
            .problem(self)
            .build();

        let mut total = 0;
        for offset in 0..=last_offset {
            // nothing damaged may be left before the first group
            if self.any_damaged(0, offset) {
                break;
            }
            total += cache.get(&(0, offset))?;
        }
        Ok(total)
    }
}

impl DpProblem<(usize, usize), u64> for &Arrangements<'_> {
    fn deps(&self, &(group, offset): &(usize, usize)) -> Vec<(usize, usize)> {
        if group + 1 == self.record.groups.len() || !self.fits(group, offset) {
            return Vec::new();
        }
        let gap_start = offset + self.record.groups[group];
        let next_len = self.record.groups[group + 1];
        (gap_start + 1..=self.len().saturating_sub(next_len))
            .take_while(|&next| !self.any_damaged(gap_start, next))
            .map(|next| (group + 1, next))
            .collect()
    }

    fn compute(&self, &(group, offset): &(usize, usize), deps: Vec<u64>) -> u64 {
        if !self.fits(group, offset) {
            return 0;
        }
        if group + 1 == self.record.groups.len() {
            // nothing damaged may be left after the last group
            let end = offset + self.record.groups[group];
            return u64::from(!self.any_damaged(end, self.len()));
        }
        deps.iter().sum()
    }
}

pub fn count_arrangements(record: &Record) -> Result<u64, SolveError> {
    Arrangements::new(record)
        .count()
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}

fn parse_record(line: &str) -> anyhow::Result<Record> {
    let (pattern, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected `pattern groups`"))?;
    if let Some(bad) = pattern.chars().find(|c| !matches!(c, '#' | '.' | '?')) {
        return Err(anyhow!("unexpected spring {bad:?}"));
    }
    let groups = groups
        .split(',')
        .map(|n| n.trim().parse().with_context(|| format!("bad group {n:?}")))
        .collect::<anyhow::Result<Vec<usize>>>()?;
    if groups.contains(&0) {
        return Err(anyhow!("groups must not be empty"));
    }
    Ok(Record {
        pattern: pattern.as_bytes().to_vec(),
        groups,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Record>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| parse_record(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let total = shared.iter().map(count_arrangements).sum::<Result<u64, _>>()?;
        Ok(total.into())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
        let total = shared
            .iter()
            .map(|record| count_arrangements(&record.unfold(UNFOLD_COPIES)))
            .sum::<Result<u64, _>>()?;
        Ok(total.into())
    }
}
