//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use cart_domain::{CartAction, CartError, Outcome};
use crate::store::{store_apply_action, CartStore};

/// Cart-wide handles provided via context
#[derive(Clone, Copy)]
pub struct CartContext {
    /// Cart state shared by the list, total and count regions
    pub store: CartStore,
}

impl CartContext {
    pub fn new(store: CartStore) -> Self {
        Self { store }
    }

    /// Apply an action and let the view catch up.
    ///
    /// Actions naming a row that is already gone are ignored.
    pub fn dispatch(&self, action: CartAction) {
        match store_apply_action(&self.store, &action) {
            Ok(Outcome::Updated { id, quantity }) => {
                log::debug!("[CART] {} {} -> quantity {}", action.kind(), id, quantity);
            }
            Ok(Outcome::Removed { id }) => {
                log::debug!("[CART] {} {} -> removed", action.kind(), id);
            }
            Err(CartError::UnknownItem(id)) => {
                log::debug!("[CART] Ignoring {} for missing item {}", action.kind(), id);
            }
            Err(err) => {
                log::warn!("[CART] {} failed: {}", action.kind(), err);
            }
        }
    }
}

/// Get the cart context
pub fn use_cart_context() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}
