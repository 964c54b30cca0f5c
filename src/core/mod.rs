//! Board primitives.
//!
//! - [`coord`]: signed `(row, col)` offsets and the knight step set.
//! - [`square`]: a validated index into the fixed 8x8 board.

pub mod coord;
pub mod square;
