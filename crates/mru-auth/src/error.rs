use mru_core::MarketError;
use thiserror::Error;

/// Local session failures: nothing here comes from the auth API itself.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not signed in; run `mru auth login`")]
    NotAuthenticated,

    #[error("session expired; run `mru auth login` to sign in again")]
    TokenExpired,

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("{0}")]
    Other(String),
}

impl From<AuthError> for MarketError {
    fn from(error: AuthError) -> Self {
        Self::Session(error.to_string())
    }
}
