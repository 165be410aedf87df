//! Order Tracking State

use crate::order_registry::OrderRecord;

/// Result of the order tracking search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackingState {
    /// Nothing searched yet
    #[default]
    Idle,
    /// Waiting for the lookup of this (normalized) id
    Loading { order_id: String },
    Found(OrderRecord),
    /// The lookup finished without a match
    NotFound { order_id: String },
}

impl TrackingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn order(&self) -> Option<&OrderRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }
}
