//! Auth state change notifications.

use crate::session::AuthUser;

/// Buffered events per subscriber before the oldest are dropped.
pub const EVENT_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(AuthUser),
    SignedOut,
    TokenRefreshed,
    UserUpdated(AuthUser),
}
