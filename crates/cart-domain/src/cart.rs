//! Cart Aggregate
//!
//! Ordered line items plus the reducer that keeps quantities, subtotals and
//! the grand total consistent. Totals are re-derived from the items on every
//! read, so there is no running sum to drift.

use crate::action::{CartAction, Outcome};
use crate::error::{CartError, CartResult};
use crate::line_item::{ItemId, LineItem};
use crate::money::Money;

/// The visible cart
///
/// Invariants: ids are unique and every present item has quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from rendered rows, in order.
    ///
    /// Zero-quantity rows are skipped and repeated ids merge into the first
    /// occurrence.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            let quantity = item.quantity();
            let unit_price = item.unit_price();
            cart.add(item.id, unit_price, quantity);
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Quantity of `id` in the cart, 0 when absent
    pub fn quantity_of(&self, id: &ItemId) -> u32 {
        self.get(id).map(LineItem::quantity).unwrap_or(0)
    }

    /// Sum of all subtotals, rounded to cents
    pub fn grand_total(&self) -> Money {
        self.items.iter().map(LineItem::subtotal).sum::<Money>().rounded()
    }

    /// Insert `quantity` units of `id`, or add them to an existing line.
    ///
    /// An existing line keeps its original unit price. Adding zero units of an
    /// absent item leaves the cart unchanged and returns `None`.
    pub fn add(&mut self, id: ItemId, unit_price: Money, quantity: u32) -> Option<Outcome> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            let quantity = item.merge(quantity);
            return Some(Outcome::Updated { id, quantity });
        }
        if quantity == 0 {
            return None;
        }
        self.items.push(LineItem::new(id.clone(), unit_price, quantity));
        Some(Outcome::Updated { id, quantity })
    }

    /// Apply one user action
    pub fn apply(&mut self, action: &CartAction) -> CartResult<Outcome> {
        let id = action.item_id();
        let index = self.position(id)?;
        match action {
            CartAction::Increase(_) => {
                let quantity = self.items[index].increase();
                Ok(Outcome::Updated { id: id.clone(), quantity })
            }
            CartAction::Decrease(_) => match self.items[index].decrease() {
                0 => {
                    self.items.remove(index);
                    Ok(Outcome::Removed { id: id.clone() })
                }
                quantity => Ok(Outcome::Updated { id: id.clone(), quantity }),
            },
            CartAction::Remove(_) => {
                self.items.remove(index);
                Ok(Outcome::Removed { id: id.clone() })
            }
        }
    }

    /// Remove a line regardless of its quantity
    pub fn remove(&mut self, id: &ItemId) -> CartResult<LineItem> {
        let index = self.position(id)?;
        Ok(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: &ItemId) -> CartResult<usize> {
        self.items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| CartError::UnknownItem(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(text: &str) -> Money {
        Money::parse(text, "$").unwrap()
    }

    fn two_item_cart() -> Cart {
        Cart::from_items([
            LineItem::new("a", price("10.00"), 1),
            LineItem::new("b", price("5.00"), 2),
        ])
    }

    #[test]
    fn test_initial_total() {
        let cart = two_item_cart();
        assert_eq!(cart.grand_total().to_string(), "$20.00");
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_increase_then_decrease_to_removal() {
        let mut cart = two_item_cart();
        let a = ItemId::from("a");
        let b = ItemId::from("b");

        let outcome = cart.apply(&CartAction::Increase(a.clone())).unwrap();
        assert_eq!(outcome, Outcome::Updated { id: a.clone(), quantity: 2 });
        assert_eq!(cart.get(&a).unwrap().subtotal().to_string(), "$20.00");
        assert_eq!(cart.grand_total().to_string(), "$30.00");

        cart.apply(&CartAction::Decrease(b.clone())).unwrap();
        assert_eq!(cart.quantity_of(&b), 1);
        let outcome = cart.apply(&CartAction::Decrease(b.clone())).unwrap();
        assert_eq!(outcome, Outcome::Removed { id: b.clone() });
        assert!(cart.get(&b).is_none());
        assert_eq!(cart.grand_total().to_string(), "$20.00");
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = two_item_cart();
        let b = ItemId::from("b");
        cart.apply(&CartAction::Increase(b.clone())).unwrap();
        assert_eq!(cart.quantity_of(&b), 3);

        cart.apply(&CartAction::Remove(b.clone())).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].id.as_str(), "a");
        assert_eq!(cart.grand_total().to_string(), "$10.00");
    }

    #[test]
    fn test_remove_last_item_reads_zero() {
        let mut cart = Cart::from_items([LineItem::new("only", price("4.99"), 5)]);
        cart.apply(&CartAction::Remove(ItemId::from("only"))).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.grand_total().to_string(), "$0.00");
    }

    #[test]
    fn test_rounding_scenario() {
        let cart = Cart::from_items([LineItem::new("x", price("3.33"), 3)]);
        assert_eq!(cart.items()[0].subtotal().to_string(), "$9.99");
        assert_eq!(cart.grand_total().to_string(), "$9.99");
    }

    #[test]
    fn test_unknown_item_is_reported() {
        let mut cart = two_item_cart();
        let ghost = ItemId::from("ghost");
        assert_eq!(
            cart.apply(&CartAction::Increase(ghost.clone())),
            Err(CartError::UnknownItem(ghost.clone()))
        );
        assert_eq!(cart, two_item_cart());
        assert!(cart.remove(&ghost).is_err());
    }

    #[test]
    fn test_from_items_merges_and_skips_zero() {
        let cart = Cart::from_items([
            LineItem::new("a", price("1.00"), 1),
            LineItem::new("z", price("9.00"), 0),
            LineItem::new("a", price("2.00"), 2),
        ]);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&ItemId::from("a")), 3);
        assert_eq!(cart.grand_total().to_string(), "$3.00");
    }

    #[test]
    fn test_add_and_clear() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(ItemId::from("a"), price("1.50"), 0), None);
        assert!(cart.is_empty());

        cart.add(ItemId::from("a"), price("1.50"), 2);
        cart.add(ItemId::from("b"), price("0.25"), 1);
        assert_eq!(cart.grand_total().to_string(), "$3.25");
        assert_eq!(cart.items().iter().map(|i| i.id.as_str()).collect::<Vec<_>>(), ["a", "b"]);

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.grand_total(), Money::ZERO);
    }
}
