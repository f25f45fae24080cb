//! OrderBook implementation for storing resting orders, bulk cancellation and
//! quantity matching.

pub mod book;
/// Trait seam over the cache operations.
pub mod cache;
pub mod error;
/// Bulk cancellation by user and by minimum quantity.
pub mod mass_cancel;
pub mod matching;
/// Admission and cancellation of single orders.
pub mod operations;
pub mod order;
mod private;
pub mod snapshot;

pub use book::OrderBook;
pub use cache::OrderCache;
pub use error::{MalformedField, OrderBookError};
pub use mass_cancel::MassCancelResult;
pub use order::{LiveOrder, Order, Side};
pub use snapshot::OrderBookSnapshot;
