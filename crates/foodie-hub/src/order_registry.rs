//! Mock order registry
//!
//! A fixed table standing in for the order tracking backend.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain_models::{status_timeline, timeline_progress, OrderStatus, TimelineStep};

/// A tracked order as the tracking screen shows it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub status: OrderStatus,
    pub estimated_time: String,
    pub items: Vec<String>,
    pub restaurant: String,
    pub delivery_address: String,
    /// Already formatted for display, e.g. "$24.99"
    pub order_total: String,
}

impl OrderRecord {
    /// Timeline of this order over every stage
    pub fn timeline(&self) -> Vec<TimelineStep<OrderStatus>> {
        status_timeline(&self.status, &OrderStatus::stages())
    }

    /// How far along the delivery is, from 0.0 (confirmed) to 1.0 (delivered)
    pub fn progress(&self) -> f64 {
        timeline_progress(&self.status, &OrderStatus::stages())
    }
}

/// Normalize what the user typed into an order id.
///
/// Returns `None` for blank input, in which case no lookup happens.
pub fn normalize_order_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// Lookup table from order id to record
#[derive(Debug, Clone, Default)]
pub struct OrderRegistry {
    orders: HashMap<String, OrderRecord>,
}

impl OrderRegistry {
    /// The two demo orders
    pub fn mock() -> Self {
        let mut registry = Self::default();
        registry.insert(OrderRecord {
            id: "FH123456".to_string(),
            status: OrderStatus::Preparing,
            estimated_time: "15-20 minutes".to_string(),
            items: vec!["Chicken Biryani".to_string(), "Mango Smoothie".to_string()],
            restaurant: "Spice Garden".to_string(),
            delivery_address: "123 Main St, Apartment 4B".to_string(),
            order_total: "$24.99".to_string(),
        });
        registry.insert(OrderRecord {
            id: "FH789012".to_string(),
            status: OrderStatus::Ready,
            estimated_time: "5-10 minutes".to_string(),
            items: vec!["Margherita Pizza".to_string(), "Caesar Salad".to_string()],
            restaurant: "Italian Corner".to_string(),
            delivery_address: "456 Oak Avenue".to_string(),
            order_total: "$29.98".to_string(),
        });
        registry
    }

    pub fn insert(&mut self, record: OrderRecord) {
        self.orders.insert(record.id.clone(), record);
    }

    /// Exact lookup by an already normalized id
    pub fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.orders.get(id)
    }

    /// Lookup by user input (trimmed, case-insensitive)
    pub fn lookup(&self, input: &str) -> Option<&OrderRecord> {
        normalize_order_id(input).and_then(|id| self.get(&id))
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
