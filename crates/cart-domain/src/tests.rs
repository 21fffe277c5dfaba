//! Cart Property Tests
//!
//! Random action sequences against the reconciliation invariants.

#[cfg(test)]
mod tests {
    use crate::{ActionKind, Cart, CartAction, ItemId, LineItem, Money, Outcome};
    use proptest::prelude::*;
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;

    const IDS: usize = 6;

    fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec((0..IDS, 0u64..100_000, 1u32..20), 0..IDS).prop_map(|rows| {
            rows.into_iter()
                .map(|(id, cents, qty)| LineItem::new(format!("item-{id}"), Money::from_cents(cents), qty))
                .collect()
        })
    }

    fn arb_actions() -> impl Strategy<Value = Vec<CartAction>> {
        let kind = prop_oneof![
            Just(ActionKind::Increase),
            Just(ActionKind::Decrease),
            Just(ActionKind::Remove),
        ];
        prop::collection::vec((kind, 0..IDS + 1), 0..60).prop_map(|steps| {
            steps
                .into_iter()
                .map(|(kind, id)| CartAction::new(kind, format!("item-{id}")))
                .collect()
        })
    }

    /// Total recomputed independently in integer cents
    fn total_in_cents(cart: &Cart) -> u64 {
        cart.items()
            .iter()
            .map(|item| {
                let cents = (item.unit_price().amount() * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
                cents * u64::from(item.quantity())
            })
            .sum()
    }

    proptest! {
        #[test]
        fn total_matches_subtotals_after_every_action(items in arb_items(), actions in arb_actions()) {
            let mut cart = Cart::from_items(items);
            for action in &actions {
                let _ = cart.apply(action);

                let sum: Money = cart.items().iter().map(LineItem::subtotal).sum();
                prop_assert_eq!(cart.grand_total(), sum);
                prop_assert_eq!(cart.grand_total(), Money::from_cents(total_in_cents(&cart)));
                prop_assert!(cart.items().iter().all(|item| item.quantity() >= 1));
            }
        }

        #[test]
        fn remove_deletes_exactly_one_item(items in arb_items(), pick in 0..IDS) {
            let mut cart = Cart::from_items(items);
            let id = ItemId::new(format!("item-{pick}"));
            let before: Vec<ItemId> = cart.items().iter().map(|i| i.id.clone()).collect();

            match cart.apply(&CartAction::Remove(id.clone())) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome, Outcome::Removed { id: id.clone() });
                    let expected: Vec<ItemId> = before.into_iter().filter(|i| *i != id).collect();
                    let after: Vec<ItemId> = cart.items().iter().map(|i| i.id.clone()).collect();
                    prop_assert_eq!(after, expected);
                }
                Err(_) => prop_assert!(!before.contains(&id)),
            }
        }

        #[test]
        fn increase_is_monotonic(cents in 0u64..1_000_000, start in 1u32..50, clicks in 1usize..30) {
            let id = ItemId::from("x");
            let mut cart = Cart::from_items([LineItem::new(id.clone(), Money::from_cents(cents), start)]);
            let mut last = cart.get(&id).cloned().unwrap();
            for _ in 0..clicks {
                cart.apply(&CartAction::Increase(id.clone())).unwrap();
                let now = cart.get(&id).cloned().unwrap();
                prop_assert!(now.quantity() > last.quantity());
                prop_assert!(now.subtotal() >= last.subtotal());
                last = now;
            }
        }

        #[test]
        fn decrease_from_one_removes(cents in 0u64..1_000_000) {
            let id = ItemId::from("x");
            let mut cart = Cart::from_items([LineItem::new(id.clone(), Money::from_cents(cents), 1)]);
            prop_assert_eq!(cart.apply(&CartAction::Decrease(id.clone())), Ok(Outcome::Removed { id }));
            prop_assert!(cart.is_empty());
            prop_assert_eq!(cart.grand_total().to_string(), "$0.00");
        }
    }
}
