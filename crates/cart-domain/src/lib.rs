//! Cart Domain
//!
//! Core entities and reconciliation rules for the storefront cart.
//! This layer has NO browser dependencies, so everything here runs on the host.

mod error;
mod money;
mod line_item;
mod action;
mod cart;
mod counter;

#[cfg(test)]
mod tests;

pub use error::{CartError, CartResult};
pub use money::{Money, DEFAULT_CURRENCY_SYMBOL, MONEY_CEILING};
pub use line_item::{parse_quantity, ItemId, LineItem};
pub use action::{ActionKind, CartAction, Outcome};
pub use cart::Cart;
pub use counter::ProductCounter;
