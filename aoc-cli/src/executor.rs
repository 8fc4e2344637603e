//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input_store::InputSource;
use aoc_solver::{Answer, DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared so one input or parse failure can be reported for every part
    pub answer: Result<Answer, Arc<ExecutorError>>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: Arc<ExecutorError>) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another, in year/day/part order
pub struct Executor {
    registry: SolverRegistry,
    input: InputSource,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create an executor; an input file must select exactly one solver
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let executor = Self {
            registry,
            input: config.input.clone(),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        };

        if let InputSource::File(_) = executor.input {
            let selected = executor.collect_work_items().len();
            if selected != 1 {
                return Err(ExecutorError::AmbiguousInput(selected));
            }
        }

        Ok(executor)
    }

    pub fn input(&self) -> &InputSource {
        &self.input
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing every part's result to `on_result`
    pub fn execute(&self, mut on_result: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_solver(&work, &mut on_result);
        }
    }

    fn run_solver(&self, work: &WorkItem, on_result: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);

        let input = match self.input.read(year, day) {
            Ok(input) => input,
            Err(source) => {
                let error = ExecutorError::InputRead {
                    year,
                    day,
                    path: self.input.path(year, day),
                    source,
                };
                tracing::warn!(year, day, "{error}");
                return fail_parts(work, Arc::new(error), on_result);
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(error) => {
                tracing::warn!(year, day, "{error}");
                return fail_parts(work, Arc::new(error.into()), on_result);
            }
        };
        let mut parse_duration = Some(solver.parse_duration());
        tracing::info!(year, day, parse_us = ?solver.parse_duration().num_microseconds(), "parsed");

        for part in work.parts.clone() {
            on_result(solve_part(year, day, part, &mut parse_duration, &mut *solver));
        }
    }
}

fn fail_parts(work: &WorkItem, error: Arc<ExecutorError>, on_result: &mut impl FnMut(SolverResult)) {
    for part in work.parts.clone() {
        on_result(SolverResult::failed(work.year, work.day, part, Arc::clone(&error)));
    }
}

/// Solve a single part; the parse time goes to the first part that succeeds
fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    parse_duration: &mut Option<TimeDelta>,
    solver: &mut dyn DynSolver,
) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            answer: Ok(result.answer),
            parse_duration: parse_duration.take(),
            solve_duration: result.duration(),
        },
        Err(error) => {
            tracing::warn!(year, day, part, "{error}");
            SolverResult::failed(
                year,
                day,
                part,
                Arc::new(SolverError::from(error).into()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_store::InputStore;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const DAY_6: &str = "Time:      7  15   30\nDistance:  9  40  200\n";
    const DAY_9: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build()
    }

    fn config(input: InputSource) -> Config {
        Config {
            year_filter: Some(2023),
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input,
            quiet: true,
        }
    }

    fn error(result: &SolverResult) -> &ExecutorError {
        result.answer.as_ref().err().expect("part should fail")
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let mut results = Vec::new();
        executor.execute(|result| results.push(result));
        results
    }

    #[test]
    fn test_work_items_follow_filters() {
        let mut config = config(InputSource::Store(InputStore::new(PathBuf::from("unused"))));
        config.day_filter = Some(5);
        config.part_filter = Some(2);
        let executor = Executor::new(registry(), &config).unwrap();

        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2023,
                day: 5,
                parts: 2..=2
            }]
        );
    }

    #[test]
    fn test_all_days_are_selected_without_filters() {
        let config = config(InputSource::Store(InputStore::new(PathBuf::from("unused"))));
        let executor = Executor::new(registry(), &config).unwrap();
        let days: Vec<u8> = executor.collect_work_items().iter().map(|w| w.day).collect();

        assert_eq!(days, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_input_file_requires_single_solver() {
        let config = config(InputSource::File(PathBuf::from("input.txt")));

        assert!(matches!(
            Executor::new(registry(), &config),
            Err(ExecutorError::AmbiguousInput(12))
        ));
    }

    #[test]
    fn test_store_inputs_are_solved_in_order() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::write(store.input_path(2023, 6), DAY_6).unwrap();
        fs::write(store.input_path(2023, 9), DAY_9).unwrap();

        let config = config(InputSource::Store(store));
        let registry = SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| [6, 9].contains(&plugin.day))
            .unwrap()
            .build();
        let results = run(&Executor::new(registry, &config).unwrap());

        let answers: Vec<(u8, u8, String)> = results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_ref().unwrap().to_string()))
            .collect();
        assert_eq!(
            answers,
            vec![
                (6, 1, "288".to_string()),
                (6, 2, "71503".to_string()),
                (9, 1, "114".to_string()),
                (9, 2, "2".to_string()),
            ]
        );
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let mut config = config(InputSource::Store(InputStore::new(temp.path().to_path_buf())));
        config.day_filter = Some(4);
        let results = run(&Executor::new(registry(), &config).unwrap());

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(
                error(result),
                ExecutorError::InputRead { day: 4, .. }
            ));
        }
    }

    #[test]
    fn test_parse_failure_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day2.txt");
        fs::write(&path, "Game one: 3 blue\n").unwrap();

        let mut config = config(InputSource::File(path));
        config.day_filter = Some(2);
        let results = run(&Executor::new(registry(), &config).unwrap());

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| matches!(
            error(r),
            ExecutorError::Solver(SolverError::ParseError(_))
        )));
    }
}
