//! Menu item model
//!
//! Catalog entries and the cart lines built from them.

use serde::{Deserialize, Serialize};

/// A dish from the catalog. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    pub image: String,
    pub category: String,
    /// 0.0 - 5.0
    pub rating: f64,
    /// Free text such as "15-20 min"
    pub prep_time: String,
}

/// A menu item in the cart together with how many were ordered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub item: MenuItem,
    /// Always >= 1 while the line is in the cart
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line with quantity 1
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// price x quantity
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// The signed-in (or guest) identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The identity used by "continue as guest"
    pub fn guest() -> Self {
        Self::new("Guest User", "guest@example.com")
    }

    /// The identity used by the mocked sign-in
    pub fn demo(email: impl Into<String>) -> Self {
        Self::new("John Doe", email)
    }
}
