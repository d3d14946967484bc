//! Puzzle helpers and the solvers built on them
//!
//! [`utils`] holds the reusable algorithms: grid primitives, region exploration,
//! weighted and unweighted search, precedence repair, block compaction and a
//! memoisation cache. [`my_solutions`] wires them into registered solvers, one
//! module per puzzle day.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
