//! Reducers module
//!
//! Pure functions producing new state from current state + action. The app
//! reducer routes each action to the reducer of its slice.

pub mod app_reducer;
pub mod cart_reducer;
pub mod checkout_reducer;
pub mod tracking_reducer;
pub mod wishlist_reducer;

pub use app_reducer::reduce;
