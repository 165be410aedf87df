//! User actions

use crate::domain_models::User;

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Replace the current user
    Set(User),
}
