//! Mass cancel operations for bulk order removal.
//!
//! Orders can be cancelled in bulk either by owning user, across every
//! security and both sides, or by security for every order whose original
//! quantity reaches a threshold. Each removed order releases its identifier
//! and sequences left empty are dropped from their index.

use super::book::OrderBook;
use super::error::{MalformedField, OrderBookError};
use super::private::remove_where;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Result of a mass cancel operation.
///
/// Contains the count and identifiers of all orders that were cancelled.
/// Fields are private; use the accessor methods instead.
///
/// # Examples
///
/// ```
/// use order_cache::MassCancelResult;
///
/// let result = MassCancelResult::default();
/// assert_eq!(result.cancelled_count(), 0);
/// assert!(result.cancelled_order_ids().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MassCancelResult {
    cancelled_count: usize,
    cancelled_order_ids: Vec<String>,
}

impl MassCancelResult {
    pub(crate) fn new(cancelled_order_ids: Vec<String>) -> Self {
        Self {
            cancelled_count: cancelled_order_ids.len(),
            cancelled_order_ids,
        }
    }

    /// Returns the number of orders cancelled.
    #[must_use]
    #[inline]
    pub fn cancelled_count(&self) -> usize {
        self.cancelled_count
    }

    /// Returns the identifiers of the cancelled orders, in processing order.
    #[must_use]
    #[inline]
    pub fn cancelled_order_ids(&self) -> &[String] {
        &self.cancelled_order_ids
    }

    /// Returns `true` if no orders were cancelled.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cancelled_count == 0
    }
}

impl std::fmt::Display for MassCancelResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MassCancelResult {{ cancelled: {} }}",
            self.cancelled_count
        )
    }
}

impl OrderBook {
    /// Cancel every live order owned by `user`, on both sides and across all
    /// securities.
    ///
    /// A user with no live orders is a no-op.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when `user` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_cache::{Order, OrderBook};
    ///
    /// let mut book = OrderBook::new();
    /// book.add_order(Order::new("1", "SecId1", "Buy", 100, "User1", "Company1")).unwrap();
    /// book.add_order(Order::new("2", "SecId2", "Sell", 200, "User1", "Company1")).unwrap();
    /// book.add_order(Order::new("3", "SecId1", "Sell", 300, "User2", "Company2")).unwrap();
    ///
    /// let result = book.cancel_orders_for_user("User1").unwrap();
    /// assert_eq!(result.cancelled_count(), 2);
    /// assert_eq!(book.order_count(), 1);
    /// ```
    pub fn cancel_orders_for_user(&mut self, user: &str) -> Result<MassCancelResult, OrderBookError> {
        if user.is_empty() {
            return Err(OrderBookError::malformed(MalformedField::EmptyUser));
        }
        trace!("Mass cancel orders for user {}", user);

        let mut cancelled = Vec::new();
        let Self {
            buy_orders,
            sell_orders,
            order_ids,
        } = &mut *self;
        for orders in buy_orders.values_mut().chain(sell_orders.values_mut()) {
            remove_where(orders, order_ids, &mut cancelled, |live| {
                live.order().user() == user
            });
        }
        self.prune_all();

        debug!(
            "Mass cancel for user {}: {} orders cancelled",
            user,
            cancelled.len()
        );
        Ok(MassCancelResult::new(cancelled))
    }

    /// Cancel every live order of `security_id`, on either side, whose
    /// original quantity is at least `min_qty`.
    ///
    /// Remaining quantity left by matching is not considered. An unknown
    /// security is a no-op and does not create index entries.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when `security_id` is empty
    /// or `min_qty` is zero.
    pub fn cancel_orders_for_sec_id_with_minimum_qty(
        &mut self,
        security_id: &str,
        min_qty: u64,
    ) -> Result<MassCancelResult, OrderBookError> {
        if security_id.is_empty() {
            return Err(OrderBookError::malformed(MalformedField::EmptySecurityId));
        }
        if min_qty == 0 {
            return Err(OrderBookError::malformed(
                MalformedField::ZeroMinimumQuantity,
            ));
        }
        trace!(
            "Mass cancel orders for security {} with quantity >= {}",
            security_id, min_qty
        );

        let mut cancelled = Vec::new();
        let Self {
            buy_orders,
            sell_orders,
            order_ids,
        } = &mut *self;
        for index in [buy_orders, sell_orders] {
            if let Some(orders) = index.get_mut(security_id) {
                remove_where(orders, order_ids, &mut cancelled, |live| {
                    live.order().qty() >= min_qty
                });
            }
        }
        self.prune_security(security_id);

        debug!(
            "Mass cancel for security {} (min qty {}): {} orders cancelled",
            security_id,
            min_qty,
            cancelled.len()
        );
        Ok(MassCancelResult::new(cancelled))
    }
}
