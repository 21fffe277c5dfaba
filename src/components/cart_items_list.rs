//! Cart Items List Component
//!
//! Renders every line item from the store. One click handler on the list
//! resolves the clicked control through its `data-action` marker.

use leptos::prelude::*;

use cart_domain::ItemId;
use crate::context::use_cart_context;
use crate::dom;
use crate::store::{store_quantity, store_subtotal_text, CartStateStoreFields};

/// One cart row
#[component]
fn CartItemRow(item_id: ItemId) -> impl IntoView {
    let ctx = use_cart_context();
    let store = ctx.store;

    // Static parts of the row never change after hydration
    let summary = store.products().read().get(&item_id).cloned().unwrap_or_default();
    let unit_price = store
        .cart()
        .read()
        .get(&item_id)
        .map(|item| item.unit_price().amount().to_string())
        .unwrap_or_default();

    let qty_id = item_id.clone();
    let quantity = move || store_quantity(&store, &qty_id);
    let subtotal_id = item_id.clone();
    let subtotal = move || store_subtotal_text(&store, &subtotal_id);

    let name = summary.name.clone();
    let image = summary.image_url.clone().map(|src| {
        view! { <img class="cart-item-image" src=src alt=name.clone() /> }
    });
    let title = match summary.url.clone() {
        Some(href) => view! { <a class="cart-item-name" href=href>{summary.name.clone()}</a> }.into_any(),
        None => view! { <span class="cart-item-name">{summary.name.clone()}</span> }.into_any(),
    };

    view! {
        <li class="cart-item" data-item-id=item_id.to_string() data-price=unit_price>
            {image}
            {title}
            <div class="quantity-controls">
                <button type="button" class="quantity-btn" data-action="decrease">"−"</button>
                <span class="quantity-value-cart">{quantity}</span>
                <button type="button" class="quantity-btn" data-action="increase">"+"</button>
            </div>
            <span class="cart-item-total" data-item-total-price="">{subtotal}</span>
            <button type="button" class="cart-item-remove" data-action="remove">"×"</button>
        </li>
    }
}

/// All line items, in server render order
#[component]
pub fn CartItemsList() -> impl IntoView {
    let ctx = use_cart_context();
    let store = ctx.store;

    // Delegated handler for every row
    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(action) = dom::action_from_event(&ev) {
            ctx.dispatch(action);
        }
    };

    view! {
        <ul class="cart-items" on:click=on_click>
            <For
                each=move || store.cart().read().items().to_vec()
                key=|item| item.id.clone()
                children=move |item| {
                    view! { <CartItemRow item_id=item.id /> }
                }
            />
        </ul>
        <Show when=move || store.cart().read().is_empty()>
            <p class="cart-empty">"Your cart is empty"</p>
        </Show>
    }
}
