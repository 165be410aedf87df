//! FoodieHub core
//!
//! Menu catalog, cart and wishlist store, checkout and order tracking for
//! the FoodieHub food-ordering demo. State lives in a single [`Store`]
//! driven by [`Action`]s; reducers are pure and middleware handles the
//! follow-up effects.

pub mod actions;
pub mod catalog;
pub mod checkout;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod order_registry;
pub mod reducers;
pub mod state;
pub mod store;

pub use actions::Action;
pub use catalog::{Catalog, MenuQuery, SortBy};
pub use checkout::{place_order, CheckoutError, OrderConfirmation};
pub use dispatcher::Dispatcher;
pub use order_registry::{OrderRecord, OrderRegistry};
pub use state::AppState;
pub use store::Store;
