use crate::actions::{Action, UserAction};
use crate::reducers::{cart_reducer, checkout_reducer, tracking_reducer, wishlist_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Cart(action) => {
            state.cart_items = cart_reducer::reduce_cart(state.cart_items, action);
        }
        Action::Wishlist(action) => {
            state.wishlist_items = wishlist_reducer::reduce_wishlist(state.wishlist_items, action);
        }
        Action::User(UserAction::Set(user)) => {
            log::debug!("User set to {}", user.email);
            state.user = Some(user.clone());
        }
        Action::Checkout(action) => {
            state.checkout = checkout_reducer::reduce_checkout(state.checkout, action);
        }
        Action::Tracking(action) => {
            state.tracking = tracking_reducer::reduce_tracking(state.tracking, action);
        }
        Action::None => {}
    }

    state
}
