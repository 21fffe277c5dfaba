//! DOM Access
//!
//! The only code that reads the server-rendered page. Everything here is
//! fail-soft: a missing element yields `None` and the caller skips the feature.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use cart_domain::{ActionKind, CartAction, ItemId};

use crate::config::{StorefrontConfig, CONFIG_ELEMENT_ID};
use crate::models::RenderedRow;

/// Marker attribute on every cart control
pub const ACTION_ATTR: &str = "data-action";
/// Item id attribute on a cart row
pub const ITEM_ID_ATTR: &str = "data-item-id";
/// Unit price attribute on a cart row
pub const PRICE_ATTR: &str = "data-price";
/// Server-side quantity on the product page controls
pub const IN_CART_ATTR: &str = "data-in-cart";
/// Class of the rows the cart view renders
pub const CART_ROW_CLASS: &str = "cart-item";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// First element matching `selector`; invalid selectors count as no match
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn text_of(element: &Element) -> Option<String> {
    element.text_content()
}

/// Text of the configuration block, if the page has one
pub fn config_text(document: &Document) -> Option<String> {
    document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| text_of(&el))
}

/// Read every server-rendered row inside the cart list
pub fn read_cart_rows(list: &Element, config: &StorefrontConfig) -> Vec<RenderedRow> {
    let Ok(nodes) = list.query_selector_all(&config.cart_item_selector) else {
        log::warn!("[HYDRATE] Invalid row selector {:?}", config.cart_item_selector);
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|row| RenderedRow {
            item_id: row.get_attribute(ITEM_ID_ATTR),
            price: row.get_attribute(PRICE_ATTR),
            quantity: query_in(&row, &config.quantity_selector).and_then(|el| text_of(&el)),
            name: query_in(&row, &config.name_selector).and_then(|el| text_of(&el)),
            image_url: query_in(&row, "img").and_then(|el| el.get_attribute("src")),
            url: query_in(&row, "a[href]").and_then(|el| el.get_attribute("href")),
        })
        .collect()
}

/// Selector matching controls whose marker is a recognised action,
/// e.g. `[data-action="increase"],[data-action="decrease"],[data-action="remove"]`
pub fn action_selector() -> String {
    ActionKind::ALL
        .iter()
        .map(|kind| format!("[{ACTION_ATTR}=\"{}\"]", kind.as_marker()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve a click inside the cart list to an action.
pub fn action_from_event(ev: &web_sys::Event) -> Option<CartAction> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    action_from_target(&target)
}

/// Action for a click landing on `target`.
///
/// Uses the nearest ancestor carrying a recognised action marker, so a control
/// nested in an element with some other `data-action` still resolves, and the
/// row enclosing that control. Anything else is `None`.
pub fn action_from_target(target: &Element) -> Option<CartAction> {
    let Some(control) = target.closest(&action_selector()).ok().flatten() else {
        log::debug!("[CART] Click outside any cart control");
        return None;
    };
    let kind = control.get_attribute(ACTION_ATTR)?.parse::<ActionKind>().ok()?;
    let row = control.closest(&format!(".{CART_ROW_CLASS}")).ok()??;
    let id = row.get_attribute(ITEM_ID_ATTR)?;
    Some(CartAction::new(kind, ItemId::from(id)))
}

/// Empty `element` and hand it over as a mount point
pub fn take_over(element: Element) -> Option<HtmlElement> {
    element.set_inner_html("");
    element.dyn_into::<HtmlElement>().ok()
}
