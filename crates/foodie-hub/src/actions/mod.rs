//! Actions module
//!
//! Every state change goes through one of these. Actions are tagged by the
//! slice of state they target; the root reducer routes them.

pub mod cart;
pub mod checkout;
pub mod tracking;
pub mod user;
pub mod wishlist;

pub use cart::CartAction;
pub use checkout::CheckoutAction;
pub use tracking::TrackingAction;
pub use user::UserAction;
pub use wishlist::WishlistAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Cart lines (add, remove, quantity, clear)
    Cart(CartAction),
    /// Saved-for-later items
    Wishlist(WishlistAction),
    /// Signed-in identity
    User(UserAction),
    /// Address / payment / review steps
    Checkout(CheckoutAction),
    /// Order tracking lookup
    Tracking(TrackingAction),

    /// No-op action. Reduces to the unchanged state.
    None,
}
