//! Application State

use super::{CheckoutState, TrackingState};
use crate::domain_models::{CartItem, MenuItem, User};

/// Application state
///
/// Owned by the store and replaced as a whole on every action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Cart lines in insertion order, at most one per item id
    pub cart_items: Vec<CartItem>,
    /// Saved items in insertion order, at most one per item id
    pub wishlist_items: Vec<MenuItem>,
    /// Signed-in or guest identity, if any
    pub user: Option<User>,
    pub checkout: CheckoutState,
    pub tracking: TrackingState,
}

impl AppState {
    /// Total number of units in the cart (the navbar badge)
    pub fn cart_count(&self) -> u32 {
        self.cart_items.iter().map(|line| line.quantity).sum()
    }

    /// Quantity of one item in the cart, 0 if absent
    pub fn cart_quantity(&self, id: &str) -> u32 {
        self.cart_items
            .iter()
            .find(|line| line.id() == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.cart_items.iter().any(|line| line.id() == id)
    }

    pub fn is_in_wishlist(&self, id: &str) -> bool {
        self.wishlist_items.iter().any(|item| item.id == id)
    }
}
