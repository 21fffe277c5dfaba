//! Storefront Front End
//!
//! Finds the enhanced regions of the server-rendered page and mounts the
//! matching components into them. Regions the page lacks are skipped.

use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::Document;

use cart_domain::ProductCounter;
use crate::components::{AddToCartControls, CartCount, CartItemsList, CartTotal};
use crate::config::StorefrontConfig;
use crate::context::CartContext;
use crate::dom;
use crate::models;
use crate::store::{CartState, CartStore};

/// Enhance whatever storefront regions `document` contains
pub fn boot(document: &Document, config: &StorefrontConfig) {
    let owner = Owner::new();
    owner.with(|| {
        if dom::query(document, &config.cart_page_selector).is_some() {
            mount_cart_page(document, config);
        }
        if dom::query(document, &config.product_page_selector).is_some() {
            mount_product_controls(document, config);
        }
    });
    // Page lifetime: the reactive graph is never torn down
    std::mem::forget(owner);
}

fn mount_cart_page(document: &Document, config: &StorefrontConfig) {
    let Some(list) = dom::query(document, &config.cart_list_selector) else {
        log::warn!("[BOOT] Cart page without {}", config.cart_list_selector);
        return;
    };

    let rows = dom::read_cart_rows(&list, config);
    let hydrated = models::hydrate(rows, &config.currency_symbol);
    let store: CartStore = Store::new(CartState::new(hydrated, config.currency_symbol.clone()));
    provide_context(CartContext::new(store));

    if let Some(mount_point) = dom::take_over(list) {
        mount_to(mount_point, CartItemsList).forget();
    }
    // Total and count live outside the list but share its store
    if let Some(mount_point) = dom::query(document, &config.cart_total_selector).and_then(dom::take_over) {
        mount_to(mount_point, CartTotal).forget();
    } else {
        log::debug!("[BOOT] No total display at {}", config.cart_total_selector);
    }
    if let Some(mount_point) = dom::query(document, &config.cart_count_selector).and_then(dom::take_over) {
        mount_to(mount_point, CartCount).forget();
    }
}

fn mount_product_controls(document: &Document, config: &StorefrontConfig) {
    let Some(controls) = dom::query(document, &config.product_controls_selector) else {
        return;
    };
    let initial = ProductCounter::from_rendered(controls.get_attribute(dom::IN_CART_ATTR).as_deref());
    log::debug!("[PRODUCT] Counter starts at {}", initial.quantity());

    if let Some(mount_point) = dom::take_over(controls) {
        mount_to(mount_point, move || view! { <AddToCartControls initial=initial /> }).forget();
    }
}
