//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! Days 1 through 12 live under [`year_2023`], one module per day. Each day
//! derives `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find them.
//!
//! Shared helpers live under [`utils`]: a line stream for sectioned inputs,
//! the interval translation engine used by day 5 and the memoization cache
//! used by day 12.

pub mod utils;
pub mod year_2023;
