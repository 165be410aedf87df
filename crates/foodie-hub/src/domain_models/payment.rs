//! Payment method model

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// How the customer pays. All of them are mocked.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethod {
    Upi,
    Card,
    CashOnDelivery,
    DigitalWallet,
}

impl PaymentMethod {
    /// Every method, in the order the checkout screen lists them
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upi => "UPI Payment",
            Self::Card => "Credit/Debit Card",
            Self::CashOnDelivery => "Cash on Delivery",
            Self::DigitalWallet => "Digital Wallet",
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            Self::Upi => "Pay via UPI (GPay, PhonePe, Paytm)",
            Self::Card => "**** **** **** 1234",
            Self::CashOnDelivery => "Pay when you receive your order",
            Self::DigitalWallet => "PayPal, Apple Pay, Google Pay",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_methods() {
        let all = PaymentMethod::all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0], PaymentMethod::Upi);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            PaymentMethod::from_str("cash_on_delivery").unwrap(),
            PaymentMethod::CashOnDelivery
        );
        assert_eq!(PaymentMethod::Card.label(), "Credit/Debit Card");
    }
}
