//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod address;
pub mod menu_item;
pub mod order_status;
pub mod order_totals;
pub mod payment;
pub mod timeline;

pub use address::{saved_addresses, AddressError, AddressForm, AddressKind, DeliveryAddress};
pub use menu_item::{CartItem, MenuItem, User};
pub use order_status::OrderStatus;
pub use order_totals::{compute_totals, OrderTotals};
pub use payment::PaymentMethod;
pub use timeline::{status_timeline, timeline_progress, TimelineStep};
