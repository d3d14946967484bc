//! Puzzle inputs read from a local directory tree

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the input for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for `year`/`day`
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing(path),
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));
        assert_eq!(
            store.input_path(2024, 1),
            PathBuf::from("inputs/2024/day01.txt")
        );
        assert_eq!(
            store.input_path(2023, 25),
            PathBuf::from("inputs/2023/day25.txt")
        );
    }

    #[test]
    fn test_read_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2024, 9));

        fs::create_dir_all(temp.path().join("2024")).unwrap();
        fs::write(temp.path().join("2024/day09.txt"), "2333133121414131402\n").unwrap();

        assert!(store.contains(2024, 9));
        assert_eq!(store.get(2024, 9).unwrap(), "2333133121414131402\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        match store.get(2024, 5) {
            Err(InputError::Missing(path)) => assert!(path.ends_with("2024/day05.txt")),
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2024/day05.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        assert!(!store.contains(2024, 5));
        assert!(matches!(store.get(2024, 5), Err(InputError::Io { .. })));
    }
}
