//! Wishlist actions
//!
//! Bulk operations of the wishlist screen ("add all to cart", "clear all")
//! are plain sequences of single-item actions, built here so the caller can
//! dispatch them one by one (and stagger them however it likes).

use super::{Action, CartAction};
use crate::domain_models::MenuItem;

#[derive(Debug, Clone, PartialEq)]
pub enum WishlistAction {
    /// Save an item (no-op if already saved)
    Add(MenuItem),
    /// Forget the item with this id
    Remove(String),
}

/// One cart add per wishlist entry, in wishlist order. The wishlist itself
/// is left alone.
pub fn add_all_to_cart(wishlist: &[MenuItem]) -> Vec<Action> {
    wishlist
        .iter()
        .map(|item| Action::Cart(CartAction::Add(item.clone())))
        .collect()
}

/// One removal per wishlist entry
pub fn clear_all(wishlist: &[MenuItem]) -> Vec<Action> {
    wishlist
        .iter()
        .map(|item| Action::Wishlist(WishlistAction::Remove(item.id.clone())))
        .collect()
}
