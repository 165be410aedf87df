//! Checkout middleware
//!
//! Empties the cart once an order has been placed.

use crate::actions::{Action, CartAction, CheckoutAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Default)]
pub struct CheckoutMiddleware;

impl CheckoutMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for CheckoutMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Checkout(CheckoutAction::OrderPlaced(confirmation)) = action {
            log::info!(
                "Order {} confirmed, clearing cart",
                confirmation.order_number
            );
            dispatcher.dispatch(Action::Cart(CartAction::Clear));
        }

        true
    }
}
