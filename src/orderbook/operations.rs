//! Order book operations: admitting and cancelling single orders

use super::book::OrderBook;
use super::error::{MalformedField, OrderBookError};
use super::order::{LiveOrder, Order, Side};
use super::private::remove_by_id;
use tracing::trace;

impl OrderBook {
    /// Add an order to the book.
    ///
    /// Fields are checked in this order: order id, security id, user,
    /// company, side (empty), quantity, identifier uniqueness, then the side
    /// value. A rejected order leaves the book untouched.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when a required field is
    /// empty, the quantity is zero or the side is not exactly `Buy` or `Sell`.
    /// Returns [`OrderBookError::DuplicateOrderId`] when the identifier is
    /// already reserved.
    pub fn add_order(&mut self, order: Order) -> Result<(), OrderBookError> {
        order.validate()?;

        if self.order_ids.contains(order.order_id()) {
            trace!("Rejecting duplicate order {}", order.order_id());
            return Err(OrderBookError::DuplicateOrderId(order.order_id().to_string()));
        }

        let side = order.parsed_side()?;

        trace!("Adding order {}", order);
        self.order_ids.insert(order.order_id().to_string());
        self.index_mut(side)
            .entry(order.security_id().to_string())
            .or_default()
            .push(LiveOrder::new(order, side));
        Ok(())
    }

    /// Cancel an order by identifier.
    ///
    /// The identifier is released first, then the buy side and the sell side
    /// are searched for the order. Cancelling an unknown identifier is a
    /// no-op and returns `Ok(None)`. This also releases the identifier of an
    /// order that was fully consumed by matching.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when `order_id` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use order_cache::{Order, OrderBook};
    ///
    /// let mut book = OrderBook::new();
    /// book.add_order(Order::new("OrdId1", "SecId1", "Buy", 100, "User1", "Company1")).unwrap();
    ///
    /// let cancelled = book.cancel_order("OrdId1").unwrap();
    /// assert_eq!(cancelled.map(|o| o.qty()), Some(100));
    /// assert!(book.is_empty());
    /// ```
    pub fn cancel_order(&mut self, order_id: &str) -> Result<Option<Order>, OrderBookError> {
        if order_id.is_empty() {
            return Err(OrderBookError::malformed(MalformedField::EmptyOrderId));
        }

        self.order_ids.remove(order_id);

        let removed = [Side::Buy, Side::Sell]
            .into_iter()
            .find_map(|side| remove_by_id(self.index_mut(side), order_id));

        match removed {
            Some(live) => {
                trace!("Cancelled order {}", order_id);
                Ok(Some(live.into_order()))
            }
            None => {
                trace!("Cancel of unknown order {} ignored", order_id);
                Ok(None)
            }
        }
    }
}
