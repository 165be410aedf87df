//! Checkout actions

use crate::checkout::OrderConfirmation;
use crate::domain_models::{DeliveryAddress, PaymentMethod};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutAction {
    /// Choose a saved or validated new address
    SelectAddress(DeliveryAddress),
    /// Choose how to pay
    SelectPayment(PaymentMethod),
    /// Continue to the next step (only if the current one is complete)
    Next,
    /// Go back one step
    Back,
    /// The (mocked) payment went through
    OrderPlaced(OrderConfirmation),
    /// Start over
    Reset,
}
