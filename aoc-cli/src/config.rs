//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::input_store::{InputSource, InputStore};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers, all of which must match
    pub tags: Vec<String>,
    pub input: InputSource,
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = match args.input {
            Some(path) => {
                let path = expand_tilde(&path);
                if path.as_os_str().is_empty() {
                    return Err(CliError::Config("Input path is empty".to_string()));
                }
                InputSource::File(path)
            }
            None => InputSource::Store(InputStore::new(expand_tilde(&args.input_dir))),
        };

        let tags = args
            .tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            input,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        Config::from_args(Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };

        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(
            expand_tilde(Path::new("~/aoc/inputs")),
            home.join("aoc/inputs")
        );
        assert_eq!(
            expand_tilde(Path::new("inputs/~")),
            PathBuf::from("inputs/~")
        );
    }

    #[test]
    fn test_positional_input_selects_file_source() {
        let config = config(&["aoc", "--day", "5", "day5.txt"]);

        assert_eq!(config.day_filter, Some(5));
        assert!(matches!(config.input, InputSource::File(ref p) if p == Path::new("day5.txt")));
    }

    #[test]
    fn test_input_dir_selects_store_source() {
        let config = config(&["aoc", "--input-dir", "puzzles"]);

        match config.input {
            InputSource::Store(store) => assert_eq!(
                store.input_path(2023, 1),
                Path::new("puzzles").join("2023_day01.txt")
            ),
            other => panic!("expected a store, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_tags_are_dropped() {
        let config = config(&["aoc", "--tags", "grid, ,math"]);

        assert_eq!(config.tags, vec!["grid".to_string(), "math".to_string()]);
    }
}
