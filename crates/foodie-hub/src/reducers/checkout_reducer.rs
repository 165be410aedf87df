//! Checkout Reducer
//!
//! Walks the address -> payment -> review steps. `Next` only moves on once
//! the current step has its selection.

use crate::actions::CheckoutAction;
use crate::state::CheckoutState;

/// Reduce checkout actions
pub fn reduce_checkout(mut state: CheckoutState, action: &CheckoutAction) -> CheckoutState {
    match action {
        CheckoutAction::SelectAddress(address) => {
            state.address = Some(address.clone());
        }
        CheckoutAction::SelectPayment(method) => {
            state.payment = Some(*method);
        }
        CheckoutAction::Next => {
            if state.can_advance() {
                state.step = state.step.next();
                log::debug!("Checkout: moved to step {}", state.step.number());
            } else {
                log::debug!(
                    "Checkout: step {} is incomplete, staying put",
                    state.step.title()
                );
            }
        }
        CheckoutAction::Back => {
            state.step = state.step.previous();
        }
        CheckoutAction::OrderPlaced(confirmation) => {
            state.confirmation = Some(confirmation.clone());
        }
        CheckoutAction::Reset => {
            state = CheckoutState::default();
        }
    }
    state
}
