//! Error types for the toolkit components
//!
//! Input-shape problems (`GridError`, `DiskError`, `OrderingError::MalformedRule`)
//! convert into [`ParseError`] so solvers can reject bad input with `?`.
//! Search and repair failures are outcomes of a well-formed input and are
//! reported through `SolveError::SolveFailed` by the caller instead.

use aoc_solver::ParseError;
use thiserror::Error;

use super::grid::Location;

/// Errors raised while building or indexing a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The input contained no rows, or only empty rows
    #[error("grid is empty")]
    Empty,
    /// A row's length differs from the first row's
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A location outside the grid was used as a starting point
    #[error("location ({}, {}) is outside the grid", .0.row, .0.col)]
    OutOfBounds(Location),
    /// A cell holds a character outside the expected alphabet
    #[error("unexpected cell {cell:?} at ({}, {})", .at.row, .at.col)]
    UnexpectedCell { cell: char, at: Location },
    /// A required marker cell was not found
    #[error("marker {0:?} not found")]
    MissingMarker(char),
    /// A marker that must be unique appears more than once
    #[error("marker {0:?} appears more than once")]
    DuplicateMarker(char),
}

/// Failures of the shortest-path searches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The goal was never settled
    #[error("no path from ({}, {}) to ({}, {})", .from.row, .from.col, .to.row, .to.col)]
    NoPath { from: Location, to: Location },
}

/// Errors from precedence rule handling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    /// A rule line is not of the form `before|after`
    #[error("malformed rule {0:?}, expected `before|after`")]
    MalformedRule(String),
    /// The rules restricted to a sequence contain a cycle
    #[error("rules form a cycle; only {placed} of {total} elements could be ordered")]
    Cycle { placed: usize, total: usize },
}

/// Errors from decoding a run-length disk map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiskError {
    /// A character in the disk map is not a decimal digit
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { found: char, position: usize },
}

/// Errors raised by the memoisation cache
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DpCacheError {
    /// An index was requested again while its own value was being computed
    #[error("dependency cycle detected")]
    Cycle,
}

/// Errors from the memoised counters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountingError {
    #[error(transparent)]
    Cache(#[from] DpCacheError),
    /// A stone's successor or a running count no longer fits in a `u64`
    #[error("count overflowed u64 while expanding stone {0}")]
    Overflow(u64),
}

impl From<GridError> for ParseError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::MissingMarker(_) => ParseError::MissingData(err.to_string()),
            _ => ParseError::InvalidFormat(err.to_string()),
        }
    }
}

impl From<DiskError> for ParseError {
    fn from(err: DiskError) -> Self {
        ParseError::InvalidFormat(err.to_string())
    }
}

impl From<OrderingError> for ParseError {
    fn from(err: OrderingError) -> Self {
        ParseError::InvalidFormat(err.to_string())
    }
}
