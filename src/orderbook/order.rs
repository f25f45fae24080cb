//! Order values held by the cache.
//!
//! [`Order`] is the plain value callers construct and hand to the book. It is
//! never mutated once built and performs no validation of its own: malformed
//! orders must be representable so that admission can reject them.
//!
//! [`LiveOrder`] is the book's view of an accepted order. It carries the
//! remaining quantity that the matching engine decrements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{MalformedField, OrderBookError};

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bid).
    Buy,
    /// Sell side (ask).
    Sell,
}

impl Side {
    /// Wire spelling of the buy side.
    pub const BUY: &'static str = "Buy";
    /// Wire spelling of the sell side.
    pub const SELL: &'static str = "Sell";

    /// Returns the canonical spelling of this side.
    #[must_use]
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => Self::BUY,
            Side::Sell => Self::SELL,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OrderBookError;

    /// Parses a side. Matching is case-sensitive: only `"Buy"` and `"Sell"`
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::BUY => Ok(Side::Buy),
            Self::SELL => Ok(Side::Sell),
            "" => Err(OrderBookError::malformed(MalformedField::EmptySide)),
            _ => Err(OrderBookError::malformed(MalformedField::InvalidSide(
                s.to_string(),
            ))),
        }
    }
}

/// A resting order as submitted by a caller.
///
/// # Examples
///
/// ```
/// use order_cache::Order;
///
/// let order = Order::new("OrdId1", "SecId1", "Buy", 1000, "User1", "CompanyA");
/// assert_eq!(order.order_id(), "OrdId1");
/// assert_eq!(order.qty(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    security_id: String,
    side: String,
    qty: u64,
    user: String,
    company: String,
}

impl Order {
    /// Builds an order value. No validation is performed here.
    pub fn new(
        order_id: impl Into<String>,
        security_id: impl Into<String>,
        side: impl Into<String>,
        qty: u64,
        user: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            security_id: security_id.into(),
            side: side.into(),
            qty,
            user: user.into(),
            company: company.into(),
        }
    }

    /// Unique order identifier.
    #[inline]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Security identifier.
    #[inline]
    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    /// Side as submitted, e.g. `"Buy"` or `"Sell"`.
    #[inline]
    pub fn side(&self) -> &str {
        &self.side
    }

    /// Original requested quantity.
    #[inline]
    pub fn qty(&self) -> u64 {
        self.qty
    }

    /// Owner of the order.
    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Company of the owning user.
    #[inline]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Checks that the required fields are present and the quantity is
    /// positive. The side value itself is checked by [`Order::parsed_side`].
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), OrderBookError> {
        let checks = [
            (&self.order_id, MalformedField::EmptyOrderId),
            (&self.security_id, MalformedField::EmptySecurityId),
            (&self.user, MalformedField::EmptyUser),
            (&self.company, MalformedField::EmptyCompany),
        ];
        for (value, field) in checks {
            if value.is_empty() {
                return Err(OrderBookError::malformed(field));
            }
        }
        if self.side.is_empty() {
            return Err(OrderBookError::malformed(MalformedField::EmptySide));
        }
        if self.qty == 0 {
            return Err(OrderBookError::malformed(MalformedField::ZeroQuantity));
        }
        Ok(())
    }

    /// Parses the side field.
    ///
    /// # Errors
    /// Returns [`OrderBookError::MalformedInput`] when the side is empty or
    /// not exactly `Buy` or `Sell`.
    pub fn parsed_side(&self) -> Result<Side, OrderBookError> {
        self.side.parse()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} (user {}, company {})",
            self.order_id, self.side, self.qty, self.security_id, self.user, self.company
        )
    }
}

/// An accepted order resting in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveOrder {
    order: Order,
    side: Side,
    remaining_quantity: u64,
}

impl LiveOrder {
    pub(crate) fn new(order: Order, side: Side) -> Self {
        let remaining_quantity = order.qty();
        Self {
            order,
            side,
            remaining_quantity,
        }
    }

    /// The order as submitted.
    #[inline]
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Parsed side of the order.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Quantity still available to match.
    #[inline]
    pub fn remaining_quantity(&self) -> u64 {
        self.remaining_quantity
    }

    /// Quantity consumed by matching so far.
    #[inline]
    pub fn filled_quantity(&self) -> u64 {
        self.order.qty() - self.remaining_quantity
    }

    #[inline]
    pub(crate) fn order_id(&self) -> &str {
        self.order.order_id()
    }

    #[inline]
    pub(crate) fn company(&self) -> &str {
        self.order.company()
    }

    #[inline]
    pub(crate) fn is_filled(&self) -> bool {
        self.remaining_quantity == 0
    }

    /// Consumes up to `quantity` and returns what was actually filled.
    pub(crate) fn fill(&mut self, quantity: u64) -> u64 {
        let filled = quantity.min(self.remaining_quantity);
        self.remaining_quantity -= filled;
        filled
    }

    pub(crate) fn into_order(self) -> Order {
        self.order
    }
}
