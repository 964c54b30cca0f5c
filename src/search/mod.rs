//! Shortest-path search over adjacency tables.

pub mod bfs;
pub mod knight;
