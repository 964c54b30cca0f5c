use std::sync::LazyLock;

use crate::core::coord::{Coord, KNIGHT_STEPS};
use crate::core::square::Square;

/// Neighbour lists for every square of the board.
///
/// Lists are kept in insertion order; for the knight table that is the order of
/// [`KNIGHT_STEPS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyTable {
    neighbors: Vec<Vec<Square>>,
}

static KNIGHT_TABLE: LazyLock<AdjacencyTable> =
    LazyLock::new(|| AdjacencyTable::from_steps(&KNIGHT_STEPS));

/// The shared knight-move table, built on first use.
pub fn knight_table() -> &'static AdjacencyTable {
    &KNIGHT_TABLE
}

impl AdjacencyTable {
    /// A table with no edges at all.
    pub fn empty() -> Self {
        Self {
            neighbors: vec![Vec::new(); Square::NUM],
        }
    }

    /// Connect every square to the on-board targets of `steps`.
    pub fn from_steps(steps: &[Coord]) -> Self {
        let neighbors = Square::all()
            .map(|sq| steps.iter().filter_map(|&d| sq.shifted(d)).collect::<Vec<_>>())
            .collect();
        Self { neighbors }
    }

    /// Add an undirected edge. Self-loops and duplicates are ignored.
    pub fn with_edge(mut self, a: Square, b: Square) -> Self {
        if a != b && !self.neighbors[a.index()].contains(&b) {
            self.neighbors[a.index()].push(b);
            self.neighbors[b.index()].push(a);
        }
        self
    }

    #[inline]
    pub fn neighbors(&self, sq: Square) -> &[Square] {
        &self.neighbors[sq.index()]
    }

    #[inline]
    pub fn degree(&self, sq: Square) -> usize {
        self.neighbors[sq.index()].len()
    }

    pub fn is_adjacent(&self, a: Square, b: Square) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
