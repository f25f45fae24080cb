//! Order book snapshot for diagnostics

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{LiveOrder, Side};
use crate::utils::current_time_millis;

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Live buy orders with their remaining quantity
    pub buys: Vec<LiveOrder>,

    /// Live sell orders with their remaining quantity
    pub sells: Vec<LiveOrder>,

    /// Number of reserved order identifiers, including fully matched orders
    pub reserved_ids: usize,
}

impl OrderBookSnapshot {
    /// Number of live orders on both sides
    pub fn order_count(&self) -> usize {
        self.buys.len() + self.sells.len()
    }

    /// Total remaining quantity on the buy side
    pub fn total_buy_quantity(&self) -> u128 {
        let quantity = self
            .buys
            .iter()
            .map(|live| u128::from(live.remaining_quantity()))
            .sum();
        trace!("total_buy_quantity: {:?}", quantity);
        quantity
    }

    /// Total remaining quantity on the sell side
    pub fn total_sell_quantity(&self) -> u128 {
        let quantity = self
            .sells
            .iter()
            .map(|live| u128::from(live.remaining_quantity()))
            .sum();
        trace!("total_sell_quantity: {:?}", quantity);
        quantity
    }

    /// Renders the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        serde_json::to_string(self).map_err(|error| OrderBookError::Serialization {
            message: error.to_string(),
        })
    }
}

impl OrderBook {
    /// Capture every live order, with its remaining quantity, and the number
    /// of reserved identifiers.
    ///
    /// Orders within a side are sorted by identifier so that equal books
    /// produce equal snapshots apart from the timestamp.
    pub fn snapshot(&self) -> OrderBookSnapshot {
        let collect = |side: Side| {
            let mut orders: Vec<LiveOrder> = self
                .index(side)
                .values()
                .flat_map(|orders| orders.iter().cloned())
                .collect();
            orders.sort_by(|a, b| a.order().order_id().cmp(b.order().order_id()));
            orders
        };

        OrderBookSnapshot {
            timestamp: current_time_millis(),
            buys: collect(Side::Buy),
            sells: collect(Side::Sell),
            reserved_ids: self.order_ids.len(),
        }
    }

    /// Render a snapshot of the book as JSON.
    pub fn snapshot_to_json(&self) -> Result<String, OrderBookError> {
        self.snapshot().to_json()
    }
}
