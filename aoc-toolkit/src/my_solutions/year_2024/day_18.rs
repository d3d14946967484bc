use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

use crate::utils::error::SearchError;
use crate::utils::grid::{Bounds, Location};
use crate::utils::search::bfs::shortest_path;

/// Side length of the memory space
const SIZE: usize = 71;
/// Bytes fallen before part 1 looks for a path
const FALLEN: usize = 1024;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["2024", "traversal"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Location>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let invalid = || ParseError::InvalidFormat(format!("expected `x,y`, got {line:?}"));
                let (x, y) = line.trim().split_once(',').ok_or_else(invalid)?;
                let x: isize = x.parse().map_err(|_| invalid())?;
                let y: isize = y.parse().map_err(|_| invalid())?;
                Ok(Location::new(y, x))
            })
            .collect()
    }
}

fn corners(size: usize) -> (Bounds, Location, Location) {
    let last = size as isize - 1;
    (
        Bounds::new(size, size),
        Location::new(0, 0),
        Location::new(last, last),
    )
}

/// Fewest steps from the top-left to the bottom-right corner once `count` bytes have fallen
pub fn escape_steps(bytes: &[Location], size: usize, count: usize) -> Result<usize, SearchError> {
    let (bounds, start, goal) = corners(size);
    let fallen: HashSet<Location> = bytes.iter().take(count).copied().collect();
    shortest_path(bounds, start, goal, |loc| fallen.contains(&loc))
        .map(|path| path.len() - 1)
        .ok_or(SearchError::NoPath {
            from: start,
            to: goal,
        })
}

/// The first byte after which the corners are disconnected, if any
///
/// The search only re-runs when a byte lands on the current route.
pub fn first_blocking_byte(bytes: &[Location], size: usize) -> Option<Location> {
    let (bounds, start, goal) = corners(size);
    let mut fallen = HashSet::new();
    let mut route: HashSet<Location> = shortest_path(bounds, start, goal, |_| false)?
        .into_iter()
        .collect();
    let mut searches = 1;

    for &byte in bytes {
        fallen.insert(byte);
        if !route.contains(&byte) {
            continue;
        }
        searches += 1;
        match shortest_path(bounds, start, goal, |loc| fallen.contains(&loc)) {
            Some(path) => route = path.into_iter().collect(),
            None => {
                debug!("corners cut off after {} bytes, {searches} searches", fallen.len());
                return Some(byte);
            }
        }
    }
    None
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        escape_steps(shared, SIZE, FALLEN)
            .map(|steps| steps.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let byte = first_blocking_byte(shared, SIZE).ok_or_else(|| {
            SolveError::SolveFailed("the exit stays reachable after every byte".into())
        })?;
        Ok(format!("{},{}", byte.col, byte.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "5,4\n4,2\n4,5\n3,0\n2,1\n6,3\n2,4\n1,5\n0,6\n3,3\n2,6\n5,1\n\
                           1,2\n5,5\n2,5\n6,5\n1,4\n0,4\n6,4\n1,1\n6,1\n1,0\n0,5\n1,6\n2,0\n";

    #[test]
    fn test_example() {
        let bytes = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(bytes.len(), 25);
        assert_eq!(bytes[0], Location::new(4, 5));
        assert_eq!(escape_steps(&bytes, 7, 12), Ok(22));
        assert_eq!(first_blocking_byte(&bytes, 7), Some(Location::new(1, 6)));
    }

    #[test]
    fn test_no_bytes() {
        assert_eq!(escape_steps(&[], 7, 12), Ok(12));
        assert_eq!(first_blocking_byte(&[], 7), None);
    }

    #[test]
    fn test_blocked_escape() {
        let wall: Vec<Location> = (0..3).map(|row| Location::new(row, 1)).collect();
        assert!(escape_steps(&wall, 3, 3).is_err());
        assert_eq!(first_blocking_byte(&wall, 3), Some(Location::new(2, 1)));
    }

    #[test]
    fn test_malformed_line() {
        assert!(Solver::parse("1,2\n3;4\n").is_err());
        assert!(Solver::parse("1,x\n").is_err());
    }
}
