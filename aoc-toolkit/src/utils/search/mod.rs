//! Shortest-path searches
//!
//! - [`dijkstra`] settles every reachable state of a weighted graph and keeps
//!   *all* predecessors tied for each state's minimal cost.
//! - [`maze`] applies it to a walled grid where turning costs extra.
//! - [`bfs`] covers unweighted grid traversal.

pub mod bfs;
mod dijkstra;
pub mod maze;

pub use dijkstra::{SearchTree, dijkstra};
