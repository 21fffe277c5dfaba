//! Cart Summary Components
//!
//! Grand total and unit count. Both are re-derived from the store on every change.

use leptos::prelude::*;

use crate::context::use_cart_context;
use crate::store::{store_grand_total_text, store_item_count};

/// Grand total text, e.g. `$30.00`
#[component]
pub fn CartTotal() -> impl IntoView {
    let store = use_cart_context().store;
    view! { {move || store_grand_total_text(&store)} }
}

/// Units currently in the cart
#[component]
pub fn CartCount() -> impl IntoView {
    let store = use_cart_context().store;
    view! { {move || store_item_count(&store).to_string()} }
}
