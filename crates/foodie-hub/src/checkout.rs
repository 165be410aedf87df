//! Order placement
//!
//! Turns a completed checkout into an order confirmation. Payment is mocked:
//! the caller waits for the configured delay and then dispatches
//! `CheckoutAction::OrderPlaced` with the confirmation built here.

use chrono::{DateTime, Utc};
use foodie_config::PricingConfig;
use serde::Serialize;
use thiserror::Error;

use crate::domain_models::{compute_totals, DeliveryAddress, OrderTotals, PaymentMethod};
use crate::state::{AppState, CheckoutStep};

/// Delivery estimate shown on the success screen
pub const ESTIMATED_DELIVERY: &str = "25-30 minutes";

/// Why an order cannot be placed yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("the cart is empty")]
    EmptyCart,
    #[error("checkout is on the {0:?} step, not on review")]
    NotOnReview(CheckoutStep),
    #[error("no delivery address selected")]
    MissingAddress,
    #[error("no payment method selected")]
    MissingPayment,
}

/// What the success screen shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderConfirmation {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_time: String,
    pub address: DeliveryAddress,
    pub payment: PaymentMethod,
    pub item_count: u32,
    pub totals: OrderTotals,
}

/// "FH" followed by the last six digits of the millisecond timestamp
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(1_000_000);
    format!("FH{:06}", millis)
}

/// Build the confirmation for the current cart and checkout selections
pub fn place_order(
    state: &AppState,
    pricing: &PricingConfig,
    now: DateTime<Utc>,
) -> Result<OrderConfirmation, CheckoutError> {
    if state.cart_items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let checkout = &state.checkout;
    if checkout.step != CheckoutStep::Review {
        return Err(CheckoutError::NotOnReview(checkout.step));
    }
    let address = checkout.address.clone().ok_or(CheckoutError::MissingAddress)?;
    let payment = checkout.payment.ok_or(CheckoutError::MissingPayment)?;

    let confirmation = OrderConfirmation {
        order_number: generate_order_number(now),
        placed_at: now,
        estimated_time: ESTIMATED_DELIVERY.to_string(),
        address,
        payment,
        item_count: state.cart_count(),
        totals: compute_totals(&state.cart_items, pricing),
    };
    log::info!(
        "Order {} placed for {} items",
        confirmation.order_number,
        confirmation.item_count
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::menu_item::fixtures::menu_item;
    use crate::domain_models::{saved_addresses, CartItem};
    use crate::state::CheckoutState;
    use chrono::TimeZone;

    fn ready_state() -> AppState {
        AppState {
            cart_items: vec![CartItem::new(menu_item("1", 299.0))],
            checkout: CheckoutState {
                step: CheckoutStep::Review,
                address: saved_addresses().into_iter().next(),
                payment: Some(PaymentMethod::CashOnDelivery),
                confirmation: None,
            },
            ..AppState::default()
        }
    }

    #[test]
    fn test_order_number_uses_last_six_digits() {
        let now = Utc.timestamp_millis_opt(1_705_312_345_678).unwrap();
        assert_eq!(generate_order_number(now), "FH345678");

        let padded = Utc.timestamp_millis_opt(1_705_312_000_042).unwrap();
        assert_eq!(generate_order_number(padded), "FH000042");
    }

    #[test]
    fn test_place_order() {
        let now = Utc.timestamp_millis_opt(1_705_312_345_678).unwrap();
        let confirmation = place_order(&ready_state(), &PricingConfig::default(), now).unwrap();

        assert_eq!(confirmation.order_number, "FH345678");
        assert_eq!(confirmation.item_count, 1);
        assert_eq!(confirmation.payment, PaymentMethod::CashOnDelivery);
        assert_eq!(confirmation.address.label, "Home");
        assert_eq!(confirmation.estimated_time, ESTIMATED_DELIVERY);
        assert_eq!(confirmation.totals.subtotal, 299.0);
    }

    #[test]
    fn test_place_order_requires_cart_and_review_step() {
        let now = Utc::now();
        let pricing = PricingConfig::default();

        let empty = AppState {
            cart_items: Vec::new(),
            ..ready_state()
        };
        assert_eq!(place_order(&empty, &pricing, now), Err(CheckoutError::EmptyCart));

        let mut early = ready_state();
        early.checkout.step = CheckoutStep::Payment;
        assert_eq!(
            place_order(&early, &pricing, now),
            Err(CheckoutError::NotOnReview(CheckoutStep::Payment))
        );

        let mut no_payment = ready_state();
        no_payment.checkout.payment = None;
        assert_eq!(
            place_order(&no_payment, &pricing, now),
            Err(CheckoutError::MissingPayment)
        );

        let mut no_address = ready_state();
        no_address.checkout.address = None;
        assert_eq!(
            place_order(&no_address, &pricing, now),
            Err(CheckoutError::MissingAddress)
        );
    }
}
