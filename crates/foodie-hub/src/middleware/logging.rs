use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Skip None to reduce noise
        if !matches!(action, Action::None) {
            log::debug!("Action: {:?} (cart: {} units)", action, state.cart_count());
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_logging_middleware_passes_through() {
        let mut middleware = LoggingMiddleware::new();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);

        assert!(middleware.handle(&Action::None, &AppState::default(), &dispatcher));
        assert!(rx.try_recv().is_err());
    }
}
