//! Order status model
//!
//! The fixed progression an order moves through after checkout.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Where an order currently is. Variants are declared in progression order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    Confirmed,
    Preparing,
    Ready,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    /// Every stage, in order
    pub fn stages() -> Vec<Self> {
        Self::iter().collect()
    }

    /// Human readable label for the tracking screen
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmed => "Order Confirmed",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready for Pickup",
            Self::PickedUp => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }
}
