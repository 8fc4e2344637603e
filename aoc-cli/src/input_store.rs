//! Local puzzle inputs

use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    pub fn get(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.input_path(year, day))
    }
}

/// Where the executor reads inputs from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One file per year/day inside a directory
    Store(InputStore),
    /// A single file given on the command line, used for the one selected solver
    File(PathBuf),
}

impl InputSource {
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputSource::Store(store) => store.input_path(year, day),
            InputSource::File(path) => path.clone(),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    pub fn read(&self, year: u16, day: u8) -> io::Result<String> {
        match self {
            InputSource::Store(store) => store.get(year, day),
            InputSource::File(path) => fs::read_to_string(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        assert_eq!(
            store.input_path(2023, 1),
            PathBuf::from("inputs").join("2023_day01.txt")
        );
        assert!(
            store
                .input_path(2023, 12)
                .to_string_lossy()
                .ends_with("2023_day12.txt")
        );
    }

    #[test]
    fn test_store_reads_existing_inputs() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 6));
        assert!(store.get(2023, 6).is_err());

        let input = "Time:      7  15   30\nDistance:  9  40  200\n";
        fs::write(store.input_path(2023, 6), input).unwrap();

        assert!(store.contains(2023, 6));
        assert_eq!(store.get(2023, 6).unwrap(), input);
    }

    #[test]
    fn test_directory_named_like_input_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir(store.input_path(2023, 3)).unwrap();

        assert!(!store.contains(2023, 3));
    }

    #[test]
    fn test_file_source_ignores_year_and_day() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("puzzle.txt");
        fs::write(&path, "0 3 6 9 12 15\n").unwrap();
        let source = InputSource::File(path.clone());

        assert_eq!(source.path(2023, 9), path);
        assert!(source.contains(2023, 1));
        assert_eq!(source.read(2023, 25).unwrap(), "0 3 6 9 12 15\n");
    }

    proptest! {
        #[test]
        fn prop_input_file_name_encodes_year_and_day(year in 2015u16..2035, day in 1u8..=25) {
            let store = InputStore::new(PathBuf::from("inputs"));
            let path = store.input_path(year, day);
            let name = path.file_name().unwrap().to_string_lossy().into_owned();

            let (y, d) = name
                .strip_suffix(".txt")
                .and_then(|stem| stem.split_once("_day"))
                .unwrap();
            prop_assert_eq!(y.parse::<u16>().unwrap(), year);
            prop_assert_eq!(d.len(), 2);
            prop_assert_eq!(d.parse::<u8>().unwrap(), day);
            prop_assert_eq!(path.parent(), Some(Path::new("inputs")));
        }
    }
}
