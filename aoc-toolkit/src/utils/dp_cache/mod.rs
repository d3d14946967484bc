//! Memoization cache for recursive counting problems
//!
//! A problem declares, for every index, which other indices it depends on and
//! how to combine their values. [`DpCache`] resolves dependencies lazily and
//! computes each index at most once for the lifetime of the cache.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`HashMapBackend`]: any hashable index, including borrowed keys such as `&str`
//!
//! # Cycles
//!
//! An index that (transitively) depends on itself is reported as
//! [`DpCacheError::Cycle`](super::error::DpCacheError::Cycle) instead of recursing forever.
//!
//! # Example
//!
//! ```rust
//! use aoc_toolkit::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::builder()
//!     .backend(VecBackend::new())
//!     .problem(Fibonacci)
//!     .build();
//! assert_eq!(cache.get(&10).unwrap(), 55);
//! ```
//!
//! Closures work too:
//!
//! ```rust
//! use aoc_toolkit::utils::dp_cache::{ClosureProblem, DpCache, HashMapBackend};
//!
//! let paths = ClosureProblem::new(
//!     |&(r, c): &(u32, u32)| {
//!         let mut deps = Vec::new();
//!         if r > 0 { deps.push((r - 1, c)); }
//!         if c > 0 { deps.push((r, c - 1)); }
//!         deps
//!     },
//!     |_: &(u32, u32), deps: Vec<u64>| if deps.is_empty() { 1 } else { deps.iter().sum::<u64>() },
//! );
//! let cache = DpCache::with_problem(HashMapBackend::new(), paths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpCacheBuilder};
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
