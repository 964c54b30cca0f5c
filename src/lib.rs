//! Small self-contained puzzle solvers: knight distance on an 8x8 board, a
//! mirror-alphabet cipher, a payment-sequence gap and a distinct-partition
//! counter.

pub mod board;
pub mod cipher;
pub mod core;
pub mod error;
pub mod logging;
pub mod partition;
pub mod payment;
pub mod query;
pub mod search;

pub use cipher::decode_cipher;
pub use error::PuzzleError;
pub use partition::partition_count;
pub use payment::payment_gap;
pub use search::knight::{knight_distance, knight_route, NO_ROUTE};
