//! Breadth-first search over an [`AdjacencyTable`].
//!
//! Edges are unweighted, so the first time a square is discovered it is via a
//! shortest path. Instead of carrying whole paths in the frontier we record one
//! distance and one parent per square; routes are rebuilt from the parents.

use std::collections::VecDeque;

use crate::board::AdjacencyTable;
use crate::core::square::Square;

/// Distance in moves from a fixed source to every square, `None` if unreachable.
pub type DistanceMap = [Option<u32>; Square::NUM];

struct Tree {
    dist: DistanceMap,
    parent: [Option<Square>; Square::NUM],
}

/// Grow a BFS tree from `source`. Stops as soon as `goal` is discovered.
fn explore(table: &AdjacencyTable, source: Square, goal: Option<Square>) -> Tree {
    let mut tree = Tree {
        dist: [None; Square::NUM],
        parent: [None; Square::NUM],
    };
    tree.dist[source.index()] = Some(0);

    let mut q: VecDeque<(Square, u32)> = VecDeque::with_capacity(Square::NUM);
    q.push_back((source, 0));

    while let Some((sq, d)) = q.pop_front() {
        for &next in table.neighbors(sq) {
            if tree.dist[next.index()].is_some() {
                continue;
            }
            tree.dist[next.index()] = Some(d + 1);
            tree.parent[next.index()] = Some(sq);
            if goal == Some(next) {
                return tree;
            }
            q.push_back((next, d + 1));
        }
    }

    tree
}

/// Minimum number of moves from `source` to `destination`.
pub fn shortest_moves(table: &AdjacencyTable, source: Square, destination: Square) -> Option<u32> {
    if source == destination {
        return Some(0);
    }
    explore(table, source, Some(destination)).dist[destination.index()]
}

/// One shortest route, `source` first and `destination` last.
///
/// The route has `shortest_moves + 1` squares.
pub fn shortest_route(
    table: &AdjacencyTable,
    source: Square,
    destination: Square,
) -> Option<Vec<Square>> {
    if source == destination {
        return Some(vec![source]);
    }

    let tree = explore(table, source, Some(destination));
    let moves = tree.dist[destination.index()]?;

    let mut route = Vec::with_capacity(moves as usize + 1);
    let mut cur = destination;
    route.push(cur);
    while let Some(prev) = tree.parent[cur.index()] {
        route.push(prev);
        cur = prev;
    }
    route.reverse();

    debug_assert_eq!(route.first(), Some(&source));
    debug_assert_eq!(route.len(), moves as usize + 1);
    Some(route)
}

/// Distances from `source` to every square.
pub fn distances_from(table: &AdjacencyTable, source: Square) -> DistanceMap {
    explore(table, source, None).dist
}

/// Largest finite distance from `source`.
pub fn eccentricity(table: &AdjacencyTable, source: Square) -> u32 {
    distances_from(table, source)
        .iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0)
}
