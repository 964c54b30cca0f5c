//! Precomputed move graphs over the board.

pub mod adjacency;

pub use adjacency::{knight_table, AdjacencyTable};
