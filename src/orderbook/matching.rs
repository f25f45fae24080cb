//! Contains the core matching engine logic for the order book.
//!
//! Matching is by quantity only. For one security every sell order is paired
//! against the buy orders of the same security, skipping pairs that belong to
//! the same company. Matched quantity is consumed from both orders and fully
//! consumed orders leave the book.

use super::book::OrderBook;
use super::error::{MalformedField, OrderBookError};
use super::order::LiveOrder;
use tracing::{debug, trace};

impl OrderBook {
    /// Match the buy and sell orders of `security_id` and return the total
    /// quantity matched.
    ///
    /// The book is mutated in place: remaining quantities are decremented and
    /// fully consumed orders are removed. Identifiers of consumed orders stay
    /// reserved, so they cannot be added again until cancelled by id.
    ///
    /// Returns 0 when either side has no orders for the security, or when
    /// every candidate pair belongs to the same company. The total is a
    /// `u128` so that summing any number of `u64` fills cannot overflow.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when `security_id` is empty.
    pub fn get_matching_size_for_security(
        &mut self,
        security_id: &str,
    ) -> Result<u128, OrderBookError> {
        if security_id.is_empty() {
            return Err(OrderBookError::malformed(MalformedField::EmptySecurityId));
        }

        let (Some(sells), Some(buys)) = (
            self.sell_orders.get_mut(security_id),
            self.buy_orders.get_mut(security_id),
        ) else {
            trace!("Security {} has no opposing orders", security_id);
            return Ok(0);
        };

        let matched = match_sequences(sells, buys);
        self.prune_security(security_id);

        debug!("Matched {} for security {}", matched, security_id);
        Ok(matched)
    }
}

/// Greedy nested scan over the sells of one security.
///
/// Removal uses `swap_remove`; the index is left in place so the order moved
/// into the freed slot is examined next.
fn match_sequences(sells: &mut Vec<LiveOrder>, buys: &mut Vec<LiveOrder>) -> u128 {
    let mut total: u128 = 0;
    let mut i = 0;

    'sells: while i < sells.len() {
        let mut j = 0;
        while j < buys.len() {
            if sells[i].company() == buys[j].company() {
                j += 1;
                continue;
            }

            let sell_remaining = sells[i].remaining_quantity();
            let buy_remaining = buys[j].remaining_quantity();

            if sell_remaining >= buy_remaining {
                total += u128::from(sells[i].fill(buy_remaining));
                let filled = buys.swap_remove(j);
                trace!("Buy order {} fully matched", filled.order_id());

                if sells[i].is_filled() {
                    let filled = sells.swap_remove(i);
                    trace!("Sell order {} fully matched", filled.order_id());
                    continue 'sells;
                }
            } else {
                total += u128::from(buys[j].fill(sell_remaining));
                let filled = sells.swap_remove(i);
                trace!("Sell order {} fully matched", filled.order_id());
                continue 'sells;
            }
        }
        i += 1;
    }

    total
}
