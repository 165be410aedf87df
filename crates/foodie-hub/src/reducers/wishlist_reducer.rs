//! Wishlist Reducer

use crate::actions::WishlistAction;
use crate::domain_models::MenuItem;

/// Reduce wishlist actions. The wishlist behaves as a set keyed by item id.
pub fn reduce_wishlist(mut items: Vec<MenuItem>, action: &WishlistAction) -> Vec<MenuItem> {
    match action {
        WishlistAction::Add(item) => {
            if items.iter().any(|saved| saved.id == item.id) {
                log::debug!("Wishlist: item {} already saved", item.id);
            } else {
                items.push(item.clone());
            }
        }
        WishlistAction::Remove(id) => {
            items.retain(|saved| saved.id != *id);
        }
    }
    items
}
