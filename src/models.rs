//! Frontend Models
//!
//! What the server rendered into the page, and how it becomes a cart model.

use std::collections::HashMap;

use cart_domain::{parse_quantity, Cart, ItemId, LineItem, Money};

/// Raw text fields of one server-rendered cart row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedRow {
    /// `data-item-id`
    pub item_id: Option<String>,
    /// `data-price`
    pub price: Option<String>,
    /// Text of the quantity region
    pub quantity: Option<String>,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// Display-only product details carried over from the server row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub image_url: Option<String>,
    pub url: Option<String>,
}

/// Result of reading the server-rendered cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HydratedCart {
    pub cart: Cart,
    pub products: HashMap<ItemId, ProductSummary>,
}

/// Turn rendered rows into the authoritative cart model.
///
/// Unreadable prices count as 0.00; rows with an unreadable or zero quantity
/// are left out. Both are logged and never abort the rest of the cart.
pub fn hydrate(rows: Vec<RenderedRow>, currency_symbol: &str) -> HydratedCart {
    let mut items = Vec::with_capacity(rows.len());
    let mut products = HashMap::new();

    for (index, row) in rows.into_iter().enumerate() {
        let id = match row.item_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => ItemId::from(id),
            _ => ItemId::new(format!("row-{index}")),
        };

        let quantity = match parse_quantity(row.quantity.as_deref().unwrap_or_default()) {
            Ok(0) => {
                log::warn!("[HYDRATE] Dropping {} with quantity 0", id);
                continue;
            }
            Ok(quantity) => quantity,
            Err(err) => {
                log::warn!("[HYDRATE] Dropping {}: {}", id, err);
                continue;
            }
        };

        let unit_price = match Money::parse(row.price.as_deref().unwrap_or_default(), currency_symbol) {
            Ok(price) => price,
            Err(err) => {
                log::warn!("[HYDRATE] {} priced at zero: {}", id, err);
                Money::ZERO
            }
        };

        products.entry(id.clone()).or_insert_with(|| ProductSummary {
            name: row.name.map(|n| n.trim().to_string()).unwrap_or_default(),
            image_url: row.image_url,
            url: row.url,
        });
        items.push(LineItem::new(id, unit_price, quantity));
    }

    let cart = Cart::from_items(items);
    log::info!(
        "[HYDRATE] {} line items, {} units, total {}",
        cart.len(),
        cart.item_count(),
        cart.grand_total().format(currency_symbol)
    );
    HydratedCart { cart, products }
}
