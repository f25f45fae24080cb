//! Prelude module that re-exports commonly used types and traits.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use order_cache::prelude::*;
//! ```

// Core order book types
pub use crate::orderbook::OrderBook;
pub use crate::orderbook::cache::OrderCache;
pub use crate::orderbook::error::{MalformedField, OrderBookError};

// Order values
pub use crate::orderbook::order::{LiveOrder, Order, Side};

// Operation results
pub use crate::orderbook::mass_cancel::MassCancelResult;

// Snapshot types
pub use crate::orderbook::snapshot::OrderBookSnapshot;

// Utility functions
pub use crate::utils::{current_time_millis, setup_logger};
