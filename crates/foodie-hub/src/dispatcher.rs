//! Dispatcher for middleware action dispatch
//!
//! When middleware needs to follow up with another action (for example
//! clearing the cart once an order is placed), it queues it on the
//! Dispatcher. The store drains the queue after the current action has been
//! reduced, so queued actions run through the full middleware chain too.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Dispatcher for sending actions through the middleware chain
#[derive(Clone, Debug)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a new dispatcher feeding the store's action queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be processed once the current one is reduced
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
