//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod checkout;
mod tracking;

pub use app::AppState;
pub use checkout::{CheckoutState, CheckoutStep};
pub use tracking::TrackingState;
