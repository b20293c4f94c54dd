//! Auth flow configuration.

use serde::{Deserialize, Serialize};

/// Origin the confirmation and reset emails link back to.
fn default_redirect_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_keyring_service() -> String {
    "mru-exchange".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Web origin used to build `redirect_to` links.
    #[serde(default = "default_redirect_origin")]
    pub redirect_origin: String,

    /// OS keychain service name for the stored session.
    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            redirect_origin: default_redirect_origin(),
            keyring_service: default_keyring_service(),
        }
    }
}

impl AuthConfig {
    /// Landing page after confirming a new account.
    pub fn signup_redirect(&self) -> String {
        format!("{}/home", self.redirect_origin.trim_end_matches('/'))
    }

    /// Landing page for the password reset link.
    pub fn reset_redirect(&self) -> String {
        format!("{}/reset-password", self.redirect_origin.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirects_join_origin() {
        let config = AuthConfig {
            redirect_origin: "https://exchange.mtroyal.ca/".into(),
            ..AuthConfig::default()
        };
        assert_eq!(config.signup_redirect(), "https://exchange.mtroyal.ca/home");
        assert_eq!(
            config.reset_redirect(),
            "https://exchange.mtroyal.ca/reset-password"
        );
    }
}
