//! Domain Errors
//!
//! Every anomaly the cart can observe. None of these are fatal: callers at the
//! page boundary log them and carry on.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::line_item::ItemId;

/// Common result type for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// Cart-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("malformed price: {0:?}")]
    MalformedPrice(String),
    #[error("negative amount: {0}")]
    NegativeAmount(Decimal),
    #[error("amount too large: {0}")]
    AmountTooLarge(Decimal),
    #[error("malformed quantity: {0:?}")]
    MalformedQuantity(String),
    #[error("item not in cart: {0}")]
    UnknownItem(ItemId),
    #[error("unknown action marker: {0:?}")]
    UnknownAction(String),
}
