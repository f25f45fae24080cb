//! Core OrderBook implementation: the side indexes, the id index and read access

use super::order::{LiveOrder, Order, Side};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Live orders of one side, keyed by security identifier.
pub(super) type OrderIndex = HashMap<String, Vec<LiveOrder>>;

/// The OrderBook holds every resting order of the venue.
///
/// Orders live in two indexes, one per side, each mapping a security
/// identifier to the sequence of live orders for that security. A third index
/// holds every reserved order identifier so that duplicate checks are O(1).
///
/// Sequences are unordered: removal swaps the last element into the freed
/// slot, so callers must not rely on the relative order of orders for a
/// security.
///
/// # Examples
///
/// ```
/// use order_cache::{Order, OrderBook};
///
/// let mut book = OrderBook::new();
/// book.add_order(Order::new("OrdId1", "SecId1", "Buy", 1000, "User1", "CompanyA")).unwrap();
/// book.add_order(Order::new("OrdId2", "SecId1", "Sell", 400, "User2", "CompanyB")).unwrap();
///
/// assert_eq!(book.get_matching_size_for_security("SecId1").unwrap(), 400);
/// assert_eq!(book.remaining_quantity("OrdId1"), Some(600));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Buy side: security → live buy orders
    pub(super) buy_orders: OrderIndex,

    /// Sell side: security → live sell orders
    pub(super) sell_orders: OrderIndex,

    /// Every reserved order identifier. Identifiers of orders consumed by
    /// matching stay here.
    pub(super) order_ids: HashSet<String>,
}

impl OrderBook {
    /// Create a new, empty order book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an order book pre-sized for `order_capacity` identifiers.
    ///
    /// ```
    /// use order_cache::OrderBook;
    ///
    /// let book = OrderBook::with_capacity(10_000);
    /// assert!(book.is_empty());
    /// ```
    pub fn with_capacity(order_capacity: usize) -> Self {
        trace!("Creating order book with capacity {}", order_capacity);
        Self {
            buy_orders: HashMap::new(),
            sell_orders: HashMap::new(),
            order_ids: HashSet::with_capacity(order_capacity),
        }
    }

    #[inline]
    pub(super) fn index(&self, side: Side) -> &OrderIndex {
        match side {
            Side::Buy => &self.buy_orders,
            Side::Sell => &self.sell_orders,
        }
    }

    #[inline]
    pub(super) fn index_mut(&mut self, side: Side) -> &mut OrderIndex {
        match side {
            Side::Buy => &mut self.buy_orders,
            Side::Sell => &mut self.sell_orders,
        }
    }

    // ------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------

    /// Number of live buy orders.
    pub fn buy_count(&self) -> usize {
        self.buy_orders.values().map(Vec::len).sum()
    }

    /// Number of live sell orders.
    pub fn sell_count(&self) -> usize {
        self.sell_orders.values().map(Vec::len).sum()
    }

    /// Number of live orders on both sides.
    pub fn order_count(&self) -> usize {
        self.buy_count() + self.sell_count()
    }

    /// Returns `true` when no live order rests in the book.
    pub fn is_empty(&self) -> bool {
        self.buy_orders.values().all(Vec::is_empty) && self.sell_orders.values().all(Vec::is_empty)
    }

    /// Number of reserved identifiers, including those of fully matched
    /// orders.
    #[inline]
    pub fn reserved_id_count(&self) -> usize {
        self.order_ids.len()
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    /// Whether `order_id` is reserved. A fully matched order keeps its
    /// identifier reserved even though it no longer rests in the book.
    #[inline]
    pub fn contains_order(&self, order_id: &str) -> bool {
        self.order_ids.contains(order_id)
    }

    /// Find a live order by identifier.
    pub fn get_order(&self, order_id: &str) -> Option<&LiveOrder> {
        self.buy_orders
            .values()
            .chain(self.sell_orders.values())
            .flat_map(|orders| orders.iter())
            .find(|live| live.order_id() == order_id)
    }

    /// Remaining quantity of a live order, `None` once it is gone.
    pub fn remaining_quantity(&self, order_id: &str) -> Option<u64> {
        self.get_order(order_id).map(LiveOrder::remaining_quantity)
    }

    /// Securities with at least one live order, sorted.
    pub fn securities(&self) -> Vec<String> {
        let mut securities: Vec<String> = self
            .buy_orders
            .iter()
            .chain(self.sell_orders.iter())
            .filter(|(_, orders)| !orders.is_empty())
            .map(|(security, _)| security.clone())
            .collect();
        securities.sort_unstable();
        securities.dedup();
        securities
    }

    /// Live orders for one security, buy side first.
    pub fn orders_for_security(&self, security_id: &str) -> Vec<LiveOrder> {
        [Side::Buy, Side::Sell]
            .into_iter()
            .filter_map(|side| self.index(side).get(security_id))
            .flat_map(|orders| orders.iter().cloned())
            .collect()
    }

    /// Copy of every live order, buy side first.
    ///
    /// Orders are reported with their original quantity. The result is an
    /// owned copy; changing it has no effect on the book.
    pub fn get_all_orders(&self) -> Vec<Order> {
        trace!("Getting all orders");
        let mut orders = Vec::with_capacity(self.order_count());
        for side in [Side::Buy, Side::Sell] {
            for live_orders in self.index(side).values() {
                orders.extend(live_orders.iter().map(|live| live.order().clone()));
            }
        }
        orders
    }

    /// Drop every order and release every reserved identifier.
    pub fn clear(&mut self) {
        trace!("Clearing order book");
        self.buy_orders.clear();
        self.sell_orders.clear();
        self.order_ids.clear();
    }
}
