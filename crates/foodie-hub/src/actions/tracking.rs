//! Order tracking actions

use crate::order_registry::OrderRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum TrackingAction {
    /// User asked to track this (raw, unnormalized) order id
    Submit(String),
    /// The lookup of `order_id` finished; `record` is `None` for no such order
    Resolved {
        order_id: String,
        record: Option<OrderRecord>,
    },
    /// Back to the empty search form
    Reset,
}
