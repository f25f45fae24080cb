//! Order book error types

use thiserror::Error;

/// The input field that made a request malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedField {
    /// Order identifier is empty
    #[error("order ID is empty")]
    EmptyOrderId,

    /// Security identifier is empty
    #[error("security ID is empty")]
    EmptySecurityId,

    /// User identifier is empty
    #[error("user is empty")]
    EmptyUser,

    /// Company identifier is empty
    #[error("company is empty")]
    EmptyCompany,

    /// Side is empty
    #[error("side is empty")]
    EmptySide,

    /// Side is neither `Buy` nor `Sell`
    #[error("invalid side: {0:?}")]
    InvalidSide(String),

    /// Order quantity is zero
    #[error("quantity is zero")]
    ZeroQuantity,

    /// Minimum quantity threshold is zero
    #[error("minimum quantity is zero")]
    ZeroMinimumQuantity,
}

/// Errors that can occur within the OrderBook
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OrderBookError {
    /// The request itself is invalid and must be fixed before retrying.
    /// The book is left untouched.
    #[error("malformed input: {field}")]
    MalformedInput {
        /// Which field was rejected
        field: MalformedField,
    },

    /// An order with this identifier is already reserved.
    #[error("order ID already exists: {0}")]
    DuplicateOrderId(String),

    /// Error while serializing snapshot data
    #[error("serialization error: {message}")]
    Serialization {
        /// Underlying error message
        message: String,
    },
}

impl OrderBookError {
    #[inline]
    pub(crate) fn malformed(field: MalformedField) -> Self {
        OrderBookError::MalformedInput { field }
    }

    /// Returns `true` for errors caused by bad caller input.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, OrderBookError::MalformedInput { .. })
    }

    /// Returns `true` when an order was rejected because its identifier is
    /// already in use.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, OrderBookError::DuplicateOrderId(_))
    }
}
