//! Add To Cart Controls Component
//!
//! Product page control: an "Add to cart" button that turns into a
//! `- N in cart +` counter once the product has been added.

use leptos::prelude::*;

use cart_domain::ProductCounter;

/// Local add-to-cart counter
///
/// # Arguments
/// * `initial` - Counter state seeded from the server-rendered page
#[component]
pub fn AddToCartControls(initial: ProductCounter) -> impl IntoView {
    let (counter, set_counter) = signal(initial);

    let button_class = move || {
        if counter.get().is_in_cart() { "add-to-cart-btn is-hidden" } else { "add-to-cart-btn" }
    };
    let counter_class = move || {
        if counter.get().is_in_cart() { "quantity-counter" } else { "quantity-counter is-hidden" }
    };

    view! {
        <button
            type="button"
            id="add-to-cart-btn"
            class=button_class
            on:click=move |_| {
                set_counter.update(|c| c.add_to_cart());
                log::debug!("[PRODUCT] Added to cart");
            }
        >
            "Add to cart"
        </button>
        <div id="quantity-counter" class=counter_class>
            <button
                type="button"
                class="quantity-btn"
                data-action="decrease"
                on:click=move |_| set_counter.update(|c| c.decrease())
            >
                "−"
            </button>
            <span class="quantity-value">{move || counter.get().label()}</span>
            <button
                type="button"
                class="quantity-btn"
                data-action="increase"
                on:click=move |_| set_counter.update(|c| c.increase())
            >
                "+"
            </button>
        </div>
    }
}
