//! Reusable algorithm building blocks shared by the puzzle solvers.

pub mod counting;
pub mod disk;
pub mod dp_cache;
pub mod error;
pub mod grid;
pub mod ordering;
pub mod region;
pub mod search;

pub use error::{CountingError, DiskError, DpCacheError, GridError, OrderingError, SearchError};
