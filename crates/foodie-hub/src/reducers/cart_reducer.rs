//! Cart Reducer
//!
//! Keeps at most one line per item id and never keeps a line at quantity 0.

use crate::actions::CartAction;
use crate::domain_models::CartItem;

/// Reduce cart actions
pub fn reduce_cart(mut items: Vec<CartItem>, action: &CartAction) -> Vec<CartItem> {
    match action {
        CartAction::Add(item) => {
            if let Some(line) = items.iter_mut().find(|line| line.id() == item.id) {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                items.push(CartItem::new(item.clone()));
            }
        }
        CartAction::Remove(id) => {
            items.retain(|line| line.id() != id);
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if *quantity <= 0 {
                items.retain(|line| line.id() != id);
            } else if let Some(line) = items.iter_mut().find(|line| line.id() == id) {
                line.quantity = u32::try_from(*quantity).unwrap_or(u32::MAX);
            } else {
                log::debug!("Cart: no line for item {}, quantity update ignored", id);
            }
        }
        CartAction::Clear => {
            items.clear();
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::menu_item::fixtures::menu_item;

    fn cart_of(ids: &[&str]) -> Vec<CartItem> {
        ids.iter()
            .fold(Vec::new(), |cart, id| reduce_cart(cart, &CartAction::Add(menu_item(id, 1.0))))
    }

    fn ids(cart: &[CartItem]) -> Vec<&str> {
        cart.iter().map(CartItem::id).collect()
    }

    fn update(id: &str, quantity: i64) -> CartAction {
        CartAction::UpdateQuantity {
            id: id.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_add_appends_new_items_in_order() {
        let cart = cart_of(&["2", "1", "3"]);
        assert_eq!(ids(&cart), vec!["2", "1", "3"]);
        assert!(cart.iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        for n in 1..=10u32 {
            let cart = (0..n).fold(Vec::new(), |cart, _| {
                reduce_cart(cart, &CartAction::Add(menu_item("7", 4.5)))
            });
            assert_eq!(cart.len(), 1);
            assert_eq!(cart[0].quantity, n);
        }
    }

    #[test]
    fn test_add_existing_keeps_position_and_fields() {
        let cart = cart_of(&["1", "2", "3"]);
        let cart = reduce_cart(cart, &CartAction::Add(menu_item("2", 1.0)));
        assert_eq!(ids(&cart), vec!["1", "2", "3"]);
        assert_eq!(cart[1].quantity, 2);
        assert_eq!(cart[1].item, menu_item("2", 1.0));
    }

    #[test]
    fn test_remove() {
        let cart = reduce_cart(cart_of(&["1", "2"]), &CartAction::Remove("1".to_string()));
        assert_eq!(ids(&cart), vec!["2"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let before = cart_of(&["1", "2"]);
        let after = reduce_cart(before.clone(), &CartAction::Remove("9".to_string()));
        assert_eq!(after, before);
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        for quantity in [1, 2, 5, 99] {
            let cart = reduce_cart(cart_of(&["1", "2"]), &update("2", quantity));
            assert_eq!(cart[1].quantity, quantity as u32);
            assert_eq!(cart[0].quantity, 1);
        }
    }

    #[test]
    fn test_update_quantity_to_zero_or_below_removes() {
        for quantity in [0, -1, -50] {
            let cart = reduce_cart(cart_of(&["1", "2"]), &update("1", quantity));
            assert_eq!(ids(&cart), vec!["2"]);
        }
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let before = cart_of(&["1"]);
        assert_eq!(reduce_cart(before.clone(), &update("9", 4)), before);
        assert_eq!(reduce_cart(before.clone(), &update("9", 0)), before);
    }

    #[test]
    fn test_update_quantity_saturates() {
        let cart = reduce_cart(cart_of(&["1"]), &update("1", i64::MAX));
        assert_eq!(cart[0].quantity, u32::MAX);
    }

    #[test]
    fn test_clear() {
        assert!(reduce_cart(cart_of(&["1", "2", "3"]), &CartAction::Clear).is_empty());
        assert!(reduce_cart(Vec::new(), &CartAction::Clear).is_empty());
    }
}
