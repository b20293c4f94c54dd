//! # mru-auth
//!
//! Account flows for MRU Exchange against the hosted auth API.
//!
//! Sign-up and sign-in are restricted to institutional email addresses; the
//! check runs in the credential builders before any request and again at
//! submission. Sessions persist across runs through the OS keychain
//! (`keyring`), a `MRU_AUTH__TOKEN` override, or a `0600` credentials file,
//! and are refreshed shortly before expiry.

pub mod client;
pub mod credentials;
pub mod error;
pub mod events;
pub mod refresh;
pub mod session;
pub mod token_store;

pub use client::AuthClient;
pub use credentials::CredentialsBuilder;
pub use error::AuthError;
pub use events::AuthEvent;
pub use session::{AuthUser, Session, SignUpOutcome};
