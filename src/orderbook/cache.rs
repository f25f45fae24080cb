//! Trait seam over the order cache operations.
//!
//! Callers that only need the cache behavior can be written against
//! [`OrderCache`] and receive any implementation, including a boxed
//! `dyn OrderCache`.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::mass_cancel::MassCancelResult;
use super::order::Order;

/// Interface of an in-memory order cache.
pub trait OrderCache {
    /// Add an order to the cache.
    fn add_order(&mut self, order: Order) -> Result<(), OrderBookError>;

    /// Cancel an order by identifier, returning it when it was live.
    fn cancel_order(&mut self, order_id: &str) -> Result<Option<Order>, OrderBookError>;

    /// Cancel every live order owned by `user`.
    fn cancel_orders_for_user(&mut self, user: &str) -> Result<MassCancelResult, OrderBookError>;

    /// Cancel the orders of a security whose original quantity is at least
    /// `min_qty`.
    fn cancel_orders_for_sec_id_with_minimum_qty(
        &mut self,
        security_id: &str,
        min_qty: u64,
    ) -> Result<MassCancelResult, OrderBookError>;

    /// Match the orders of a security and return the quantity matched.
    fn get_matching_size_for_security(
        &mut self,
        security_id: &str,
    ) -> Result<u128, OrderBookError>;

    /// Copy of every live order.
    fn get_all_orders(&self) -> Vec<Order>;
}

impl OrderCache for OrderBook {
    fn add_order(&mut self, order: Order) -> Result<(), OrderBookError> {
        OrderBook::add_order(self, order)
    }

    fn cancel_order(&mut self, order_id: &str) -> Result<Option<Order>, OrderBookError> {
        OrderBook::cancel_order(self, order_id)
    }

    fn cancel_orders_for_user(&mut self, user: &str) -> Result<MassCancelResult, OrderBookError> {
        OrderBook::cancel_orders_for_user(self, user)
    }

    fn cancel_orders_for_sec_id_with_minimum_qty(
        &mut self,
        security_id: &str,
        min_qty: u64,
    ) -> Result<MassCancelResult, OrderBookError> {
        OrderBook::cancel_orders_for_sec_id_with_minimum_qty(self, security_id, min_qty)
    }

    fn get_matching_size_for_security(
        &mut self,
        security_id: &str,
    ) -> Result<u128, OrderBookError> {
        OrderBook::get_matching_size_for_security(self, security_id)
    }

    fn get_all_orders(&self) -> Vec<Order> {
        OrderBook::get_all_orders(self)
    }
}
