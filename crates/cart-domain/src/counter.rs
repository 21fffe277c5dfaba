//! Product Counter
//!
//! The "add to cart" control on a product page. At zero it is a single
//! button; above zero it becomes a `- N in cart +` counter.

use serde::{Deserialize, Serialize};

use crate::line_item::parse_quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductCounter {
    quantity: u32,
}

impl ProductCounter {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }

    /// Counter seeded from a server-rendered `data-in-cart` value; unreadable values start at 0
    pub fn from_rendered(text: Option<&str>) -> Self {
        Self::new(text.and_then(|t| parse_quantity(t).ok()).unwrap_or(0))
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_in_cart(&self) -> bool {
        self.quantity > 0
    }

    /// First click on the add button
    pub fn add_to_cart(&mut self) {
        if self.quantity == 0 {
            self.quantity = 1;
        }
    }

    pub fn increase(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrease(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    pub fn label(&self) -> String {
        format!("{} in cart", self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_count() {
        let mut counter = ProductCounter::default();
        assert!(!counter.is_in_cart());

        counter.add_to_cart();
        assert_eq!(counter.quantity(), 1);
        assert_eq!(counter.label(), "1 in cart");

        counter.increase();
        counter.increase();
        counter.add_to_cart();
        assert_eq!(counter.quantity(), 3);
    }

    #[test]
    fn test_decrease_back_to_button() {
        let mut counter = ProductCounter::new(1);
        counter.decrease();
        assert!(!counter.is_in_cart());
        counter.decrease();
        assert_eq!(counter.quantity(), 0);
    }

    #[test]
    fn test_from_rendered() {
        assert_eq!(ProductCounter::from_rendered(Some(" 4 ")).quantity(), 4);
        assert_eq!(ProductCounter::from_rendered(Some("lots")).quantity(), 0);
        assert_eq!(ProductCounter::from_rendered(None).quantity(), 0);
    }
}
