//! Line Item Entity
//!
//! One product row in the cart: a fixed unit price and a mutable quantity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::money::Money;

/// Opaque item identifier as rendered by the server (`data-item-id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cart line item
///
/// Quantity only changes through [`crate::Cart`], which removes the item
/// before it could be observed at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier within the cart
    pub id: ItemId,
    /// Price of one unit, fixed for the item's lifetime
    unit_price: Money,
    /// Units in the cart
    quantity: u32,
}

impl LineItem {
    pub fn new(id: impl Into<ItemId>, unit_price: Money, quantity: u32) -> Self {
        Self {
            id: id.into(),
            unit_price,
            quantity,
        }
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price * quantity`, rounded to cents. Always derived, never stored.
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn increase(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity
    }

    pub(crate) fn decrease(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_sub(1);
        self.quantity
    }

    pub(crate) fn merge(&mut self, quantity: u32) -> u32 {
        self.quantity = self.quantity.saturating_add(quantity);
        self.quantity
    }
}

/// Parse a quantity as rendered on the page, e.g. `"3"` or `" 12\n"`
pub fn parse_quantity(text: &str) -> CartResult<u32> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| CartError::MalformedQuantity(text.to_string()))
}
