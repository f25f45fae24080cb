use super::book::{OrderBook, OrderIndex};
use super::order::{LiveOrder, Side};
use std::collections::HashSet;

/// Removes every order in `orders` matching `predicate`, releasing its
/// identifier and recording it in `cancelled`.
///
/// Uses swap-removal: the last order moves into the freed slot and that slot
/// is examined again before the scan advances.
pub(super) fn remove_where<F>(
    orders: &mut Vec<LiveOrder>,
    order_ids: &mut HashSet<String>,
    cancelled: &mut Vec<String>,
    mut predicate: F,
) where
    F: FnMut(&LiveOrder) -> bool,
{
    let mut index = 0;
    while index < orders.len() {
        if !predicate(&orders[index]) {
            index += 1;
            continue;
        }
        let removed = orders.swap_remove(index);
        let order_id = order_ids
            .take(removed.order_id())
            .unwrap_or_else(|| removed.order_id().to_string());
        cancelled.push(order_id);
    }
}

/// Removes the first order with `order_id` from any security of `index`.
pub(super) fn remove_by_id(index: &mut OrderIndex, order_id: &str) -> Option<LiveOrder> {
    let (security, position) = index.iter().find_map(|(security, orders)| {
        orders
            .iter()
            .position(|live| live.order_id() == order_id)
            .map(|position| (security.clone(), position))
    })?;

    let orders = index.get_mut(&security)?;
    let removed = orders.swap_remove(position);
    if orders.is_empty() {
        index.remove(&security);
    }
    Some(removed)
}

impl OrderBook {
    /// Drops the sequences of `security_id` that no longer hold any order.
    pub(super) fn prune_security(&mut self, security_id: &str) {
        for side in [Side::Buy, Side::Sell] {
            let index = self.index_mut(side);
            if index.get(security_id).is_some_and(Vec::is_empty) {
                index.remove(security_id);
            }
        }
    }

    /// Drops every empty sequence on both sides.
    pub(super) fn prune_all(&mut self) {
        self.buy_orders.retain(|_, orders| !orders.is_empty());
        self.sell_orders.retain(|_, orders| !orders.is_empty());
    }
}
