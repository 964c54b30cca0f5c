//! Knight distance on the standard board.
//!
//! The knight graph is undirected, so searching from the destination back to
//! the source gives the same count; one search is enough.

use tracing::trace;

use crate::board::{knight_table, AdjacencyTable};
use crate::core::square::Square;
use crate::error::PuzzleError;
use crate::search::bfs::{shortest_moves, shortest_route};

/// Returned by [`distance_on`] when the destination cannot be reached.
///
/// Every pair of squares on the 8x8 knight board is connected, so
/// [`knight_distance`] never yields it; tables built with
/// [`AdjacencyTable::with_edge`] can.
pub const NO_ROUTE: i32 = -1;

/// Move count between two squares of `table`, or [`NO_ROUTE`].
pub fn distance_on(table: &AdjacencyTable, src: Square, dst: Square) -> i32 {
    let moves = shortest_moves(table, src, dst);
    trace!(%src, %dst, ?moves, "search finished");
    moves.map_or(NO_ROUTE, |m| m as i32)
}

/// Minimum number of knight moves between two board indices.
///
/// Indices must lie in `[0, 64)`.
pub fn knight_distance(source: i64, destination: i64) -> Result<i32, PuzzleError> {
    let src = Square::try_from(source)?;
    let dst = Square::try_from(destination)?;

    if src == dst {
        return Ok(0);
    }

    Ok(distance_on(knight_table(), src, dst))
}

/// One shortest knight route between two board indices, endpoints included.
pub fn knight_route(source: i64, destination: i64) -> Result<Option<Vec<Square>>, PuzzleError> {
    let src = Square::try_from(source)?;
    let dst = Square::try_from(destination)?;
    Ok(shortest_route(knight_table(), src, dst))
}
