//! Order totals
//!
//! Subtotal, delivery fee, tax and grand total derived from the cart.

use foodie_config::PricingConfig;
use serde::{Deserialize, Serialize};

use super::CartItem;

/// Price breakdown shown on the cart and checkout screens
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderTotals {
    /// Whether the delivery fee was waived
    pub fn free_delivery(&self) -> bool {
        self.delivery_fee == 0.0
    }

    /// How much more the cart needs for the fee to be waived, `None` once it is.
    ///
    /// A subtotal sitting exactly on the threshold still pays the fee and
    /// yields `Some(0.0)`.
    pub fn amount_to_free_delivery(&self, pricing: &PricingConfig) -> Option<f64> {
        if self.free_delivery() {
            None
        } else {
            Some((pricing.free_delivery_threshold - self.subtotal).max(0.0))
        }
    }
}

/// Derive the totals for a cart.
///
/// Delivery is free only when the subtotal is strictly above the threshold,
/// so an empty cart still pays the fee.
pub fn compute_totals(cart_items: &[CartItem], pricing: &PricingConfig) -> OrderTotals {
    let subtotal: f64 = cart_items.iter().map(CartItem::line_total).sum();
    let delivery_fee = if subtotal > pricing.free_delivery_threshold {
        0.0
    } else {
        pricing.delivery_fee
    };
    let tax = subtotal * pricing.tax_rate;

    OrderTotals {
        subtotal,
        delivery_fee,
        tax,
        total: subtotal + delivery_fee + tax,
    }
}
