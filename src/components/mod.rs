//! UI Components
//!
//! Leptos components mounted into the server-rendered pages.

mod cart_items_list;
mod cart_summary;
mod add_to_cart_controls;

pub use cart_items_list::CartItemsList;
pub use cart_summary::{CartCount, CartTotal};
pub use add_to_cart_controls::AddToCartControls;
