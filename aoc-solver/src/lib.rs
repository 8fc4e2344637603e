//! Advent of Code Solver Library
//!
//! A small framework for puzzle days that parse a text input once and produce
//! one integer [`Answer`] per part.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the data shared by all parts
//! - [`PartSolver<N>`] solves part `N` from that shared data
//! - [`Solver`] dispatches a runtime part number, normally derived with
//!   `#[derive(AocSolver)]`
//! - [`SolverRegistry`] creates timed, type-erased [`DynSolver`] instances by year and day
//! - [`SolverPlugin`] lets days register themselves through `inventory`,
//!   normally via `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{Answer, AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<u64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Ok(shared.iter().sum::<u64>().into())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<Answer, SolveError> {
//!         Ok(shared.iter().product::<u64>().into())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, 6u64);
//! assert_eq!(solver.solve(2).unwrap().answer, 6u64);
//! ```
//!
//! # Plugins
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 5, tags = ["ranges"])]
//! pub struct Solver;
//! ```

mod answer;
mod error;
mod instance;
mod registry;
mod solver;

pub use answer::Answer;
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
