//! Cart State Store
//!
//! Uses Leptos reactive_stores so each view region tracks only the fields it reads.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use cart_domain::{Cart, CartAction, CartResult, ItemId, Outcome};
use crate::models::{HydratedCart, ProductSummary};

/// Cart page state
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    /// Authoritative cart model
    pub cart: Cart,
    /// Display details per line item
    pub products: HashMap<ItemId, ProductSummary>,
    /// Prefix for displayed amounts
    pub currency_symbol: String,
}

impl CartState {
    pub fn new(hydrated: HydratedCart, currency_symbol: String) -> Self {
        Self {
            cart: hydrated.cart,
            products: hydrated.products,
            currency_symbol,
        }
    }
}

/// Type alias for the store
pub type CartStore = Store<CartState>;

// ========================
// Store Helper Functions
// ========================

/// Run one action through the cart reducer
pub fn store_apply_action(store: &CartStore, action: &CartAction) -> CartResult<Outcome> {
    store.cart().write().apply(action)
}

/// Grand total formatted for display, e.g. `$30.00`
pub fn store_grand_total_text(store: &CartStore) -> String {
    let symbol = store.currency_symbol().get();
    store.cart().read().grand_total().format(&symbol)
}

/// Subtotal of one line formatted for display; empty once the line is gone
pub fn store_subtotal_text(store: &CartStore, id: &ItemId) -> String {
    let symbol = store.currency_symbol().get();
    store
        .cart()
        .read()
        .get(id)
        .map(|item| item.subtotal().format(&symbol))
        .unwrap_or_default()
}

/// Current quantity of one line, 0 once the line is gone
pub fn store_quantity(store: &CartStore, id: &ItemId) -> u32 {
    store.cart().read().quantity_of(id)
}

/// Units across the whole cart
pub fn store_item_count(store: &CartStore) -> u64 {
    store.cart().read().item_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_domain::{LineItem, Money};

    fn test_store() -> CartStore {
        let hydrated = HydratedCart {
            cart: Cart::from_items([
                LineItem::new("a", Money::from_cents(1000), 1),
                LineItem::new("b", Money::from_cents(500), 2),
            ]),
            products: HashMap::new(),
        };
        Store::new(CartState::new(hydrated, "$".to_string()))
    }

    #[test]
    fn test_store_round_trip_of_actions() {
        let owner = Owner::new();
        owner.with(|| {
            let store = test_store();
            let a = ItemId::from("a");
            let b = ItemId::from("b");
            assert_eq!(store_grand_total_text(&store), "$20.00");
            assert_eq!(store_item_count(&store), 3);

            store_apply_action(&store, &CartAction::Increase(a.clone())).unwrap();
            assert_eq!(store_quantity(&store, &a), 2);
            assert_eq!(store_subtotal_text(&store, &a), "$20.00");
            assert_eq!(store_grand_total_text(&store), "$30.00");

            store_apply_action(&store, &CartAction::Decrease(b.clone())).unwrap();
            store_apply_action(&store, &CartAction::Decrease(b.clone())).unwrap();
            assert_eq!(store_quantity(&store, &b), 0);
            assert_eq!(store_subtotal_text(&store, &b), "");
            assert_eq!(store_grand_total_text(&store), "$20.00");
        });
    }

    #[test]
    fn test_store_unknown_item_leaves_state() {
        let owner = Owner::new();
        owner.with(|| {
            let store = test_store();
            assert!(store_apply_action(&store, &CartAction::Remove(ItemId::from("zzz"))).is_err());
            assert_eq!(store_grand_total_text(&store), "$20.00");
        });
    }
}
