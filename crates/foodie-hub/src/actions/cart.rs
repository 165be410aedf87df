//! Cart actions

use crate::domain_models::MenuItem;

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add one of this item (increments the quantity if already in the cart)
    Add(MenuItem),
    /// Remove the line with this item id
    Remove(String),
    /// Set the quantity of a line; zero or below removes it
    UpdateQuantity { id: String, quantity: i64 },
    /// Empty the cart
    Clear,
}
