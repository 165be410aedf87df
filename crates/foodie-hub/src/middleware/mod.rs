use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod checkout_middleware;
pub mod logging;

pub use checkout_middleware::CheckoutMiddleware;
pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to queue follow-up actions
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
