//! # In-Memory Order Cache
//!
//! An in-memory order book cache for a trading venue. It stores resting buy
//! and sell orders keyed by security, supports cancellation by order, by user
//! or by minimum quantity, and computes the quantity that can be matched
//! between opposing orders of a security.
//!
//! ## Key Features
//!
//! - **Indexed Storage**: One index per side maps each security to its live
//!   orders, and a set of reserved identifiers gives O(1) duplicate checks.
//!
//! - **Quantity Matching**: Matching ignores price. Every sell of a security
//!   is paired against its buys, orders from the same company never trade with
//!   each other, and quantity is consumed greedily with partial fills.
//!
//! - **In-Place Compaction**: Removed orders are swapped with the last order
//!   of their sequence, so cancellation and matching never shift memory.
//!
//! - **Typed Errors**: Malformed requests and duplicate identifiers are
//!   reported through [`OrderBookError`] and leave the book untouched.
//!
//! - **Snapshots**: [`OrderBook::snapshot`] exports the live orders with their
//!   remaining quantity for diagnostics.
//!
//! ## Matching Semantics
//!
//! For a security, sells are scanned in sequence order and each sell is
//! offered to the buys in sequence order:
//!
//! 1. Pairs with the same company are skipped.
//! 2. The traded quantity is the smaller remaining quantity of the pair.
//! 3. Orders whose remaining quantity reaches zero leave the book.
//!
//! Identifiers of fully matched orders stay reserved. Adding a new order with
//! such an identifier fails with [`OrderBookError::DuplicateOrderId`] until
//! the identifier is released with [`OrderBook::cancel_order`].
//!
//! ## Example
//!
//! ```
//! use order_cache::prelude::*;
//!
//! let mut book = OrderBook::new();
//! book.add_order(Order::new("OrdId1", "SecId1", "Buy", 1000, "User1", "CompanyA")).unwrap();
//! book.add_order(Order::new("OrdId2", "SecId1", "Sell", 500, "User2", "CompanyA")).unwrap();
//! book.add_order(Order::new("OrdId3", "SecId1", "Sell", 300, "User3", "CompanyB")).unwrap();
//!
//! // OrdId2 cannot trade with OrdId1: both belong to CompanyA.
//! assert_eq!(book.get_matching_size_for_security("SecId1").unwrap(), 300);
//! assert_eq!(book.remaining_quantity("OrdId1"), Some(700));
//!
//! let result = book.cancel_orders_for_user("User2").unwrap();
//! assert_eq!(result.cancelled_count(), 1);
//! ```
//!
//! ## Threading
//!
//! Mutating operations take `&mut self`. `OrderBook` is `Send + Sync`; share
//! it between threads behind a single `Mutex` or `RwLock`.
//!
//! ## Logging
//!
//! Operations emit `tracing` events. [`setup_logger`] installs a fmt
//! subscriber whose level is read from the `LOGLEVEL` environment variable.

pub mod orderbook;

pub mod prelude;
mod utils;

pub use orderbook::{
    LiveOrder, MalformedField, MassCancelResult, Order, OrderBook, OrderBookError,
    OrderBookSnapshot, OrderCache, Side,
};
pub use utils::{current_time_millis, setup_logger};
