//! Credential builders for the three account flows.
//!
//! The flow is chosen by the builder's mode type, so `reverify` exists only
//! on sign-up and `reset_password` only on sign-in. Every setter validates
//! its own input; `submit` re-checks the email domain before any request.

use std::marker::PhantomData;

use mru_core::drafts::CredentialsDraft;
use mru_core::entities::UserProfile;
use mru_core::enums::Field;
use mru_core::updates::ProfileChange;
use mru_core::{MarketError, MarketResult, ValidationError, validate};

use crate::client::AuthClient;
use crate::session::{AuthUser, Session, SignUpOutcome, UserMetadata, UserUpdate};

mod sealed {
    pub trait Sealed {}
}

/// Flow a [`CredentialsBuilder`] is collecting input for.
pub trait Mode: sealed::Sealed {
    /// Password rule applied by the setter.
    fn password(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError>;
}

/// New account: full password rules.
#[derive(Debug)]
pub struct SignUp;
/// Existing account: the password only has to be present.
#[derive(Debug)]
pub struct SignIn;
/// Signed-in account changes.
#[derive(Debug)]
pub struct Modify;

impl sealed::Sealed for SignUp {}
impl sealed::Sealed for SignIn {}
impl sealed::Sealed for Modify {}

impl Mode for SignUp {
    fn password(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
        validate::password(slot, raw)
    }
}

impl Mode for SignIn {
    fn password(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
        validate::password_present(slot, raw)
    }
}

impl Mode for Modify {
    fn password(slot: &mut Option<String>, raw: &str) -> Result<String, ValidationError> {
        validate::password(slot, raw)
    }
}

/// What a modify submission changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Modified {
    pub user: Option<AuthUser>,
    pub profile: Option<UserProfile>,
}

#[derive(Debug)]
pub struct CredentialsBuilder<'a, M: Mode> {
    auth: &'a AuthClient<'a>,
    draft: CredentialsDraft,
    mode: PhantomData<M>,
}

impl<'a, M: Mode> CredentialsBuilder<'a, M> {
    #[must_use]
    pub fn new(auth: &'a AuthClient<'a>) -> Self {
        Self {
            auth,
            draft: CredentialsDraft::default(),
            mode: PhantomData,
        }
    }

    pub fn email(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::email(&mut self.draft.email, raw)?;
        Ok(self)
    }

    pub fn password(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        M::password(&mut self.draft.password, raw)?;
        Ok(self)
    }

    /// First and last name together; neither is stored unless both pass.
    pub fn fullname(&mut self, first: &str, last: &str) -> Result<&mut Self, ValidationError> {
        let first = validate::first_name(&mut None, first)?;
        let last = validate::last_name(&mut None, last)?;
        self.draft.first_name = Some(first);
        self.draft.last_name = Some(last);
        Ok(self)
    }

    pub fn username(&mut self, raw: &str) -> Result<&mut Self, ValidationError> {
        validate::username(&mut self.draft.username, raw)?;
        Ok(self)
    }

    #[must_use]
    pub const fn draft(&self) -> &CredentialsDraft {
        &self.draft
    }

    /// The stored email, re-checked against the institutional domain.
    fn verified_email(&self) -> Result<&str, ValidationError> {
        let email = self
            .draft
            .email
            .as_deref()
            .ok_or_else(|| ValidationError::new(Field::Email, "Email is empty"))?;
        if !validate::is_institutional_email(email) {
            return Err(ValidationError::new(
                Field::Email,
                format!("Only @{} email addresses are allowed", validate::EMAIL_DOMAIN),
            ));
        }
        Ok(email)
    }

    fn required_password(&self) -> Result<&str, ValidationError> {
        self.draft
            .password
            .as_deref()
            .ok_or_else(|| ValidationError::new(Field::Password, "Password cannot be empty"))
    }
}

impl CredentialsBuilder<'_, SignUp> {
    pub async fn submit(&self) -> MarketResult<SignUpOutcome> {
        let email = self.verified_email()?;
        let password = self.required_password()?;
        let metadata = UserMetadata {
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            user_name: self.draft.username.clone(),
        };
        self.auth.sign_up(email, password, &metadata).await
    }

    /// Ask for the confirmation email again.
    pub async fn reverify(&self) -> MarketResult<()> {
        let email = self.verified_email()?;
        self.auth.resend_confirmation(email).await
    }
}

impl CredentialsBuilder<'_, SignIn> {
    pub async fn submit(&self) -> MarketResult<Session> {
        let email = self.verified_email()?;
        let password = self.required_password()?;
        self.auth.sign_in(email, password).await
    }

    /// Send a reset link to the stored email.
    pub async fn reset_password(&self) -> MarketResult<()> {
        let email = self.verified_email()?;
        self.auth.recover(email).await
    }
}

impl CredentialsBuilder<'_, Modify> {
    /// Apply login changes through the auth API and name changes to the
    /// marketplace profile.
    ///
    /// # Errors
    ///
    /// Fails without a request when nothing was set, and with
    /// `MarketError::Session` when not signed in.
    pub async fn submit(&self) -> MarketResult<Modified> {
        if !self.draft.has_login() && !self.draft.has_profile() {
            return Err(MarketError::from("No account changes specified"));
        }
        let email = match &self.draft.email {
            Some(_) => Some(self.verified_email()?.to_string()),
            None => None,
        };

        let user = if self.draft.has_login() {
            let update = UserUpdate {
                email: email.clone(),
                password: self.draft.password.clone(),
            };
            Some(self.auth.update_user(&update).await?)
        } else {
            None
        };

        let change = ProfileChange {
            email,
            user_name: self.draft.username.clone(),
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            profile_image: None,
        };
        let profile = if change.is_empty() {
            None
        } else {
            let subject = match &user {
                Some(user) => user.id.clone(),
                None => self.auth.current_user().await?.id,
            };
            Some(self.auth.market().update_profile(&subject, &change).await?)
        };

        Ok(Modified { user, profile })
    }
}

impl<'a> AuthClient<'a> {
    #[must_use]
    pub fn sign_up_builder(&'a self) -> CredentialsBuilder<'a, SignUp> {
        CredentialsBuilder::new(self)
    }

    #[must_use]
    pub fn sign_in_builder(&'a self) -> CredentialsBuilder<'a, SignIn> {
        CredentialsBuilder::new(self)
    }

    #[must_use]
    pub fn modify_builder(&'a self) -> CredentialsBuilder<'a, Modify> {
        CredentialsBuilder::new(self)
    }
}

#[cfg(test)]
mod tests {
    use mru_config::{AuthConfig, BackendConfig, StorageConfig};
    use mru_db::MarketClient;

    use super::*;

    fn market() -> MarketClient {
        let backend = BackendConfig {
            url: "http://localhost:54321".into(),
            anon_key: "anon".into(),
            ..BackendConfig::default()
        };
        MarketClient::new(&backend, &StorageConfig::default()).expect("client builds")
    }

    #[test]
    fn sign_in_accepts_short_password_sign_up_does_not() {
        let market = market();
        let auth = AuthClient::new(&market, &AuthConfig::default());
        assert!(auth.sign_in_builder().password("abc").is_ok());
        assert_eq!(
            auth.sign_up_builder()
                .password("abc")
                .expect_err("too short")
                .field,
            Field::Password
        );
    }

    #[test]
    fn fullname_stores_both_or_neither() {
        let market = market();
        let auth = AuthClient::new(&market, &AuthConfig::default());
        let mut builder = auth.sign_up_builder();
        assert!(builder.fullname("Ada", "L0velace").is_err());
        assert_eq!(builder.draft().first_name, None);

        builder.fullname("Ada", "Lovelace").expect("valid");
        assert_eq!(builder.draft().first_name.as_deref(), Some("Ada"));
        assert_eq!(builder.draft().last_name.as_deref(), Some("Lovelace"));
    }

    #[test]
    fn email_setter_rejects_other_domains() {
        let market = market();
        let auth = AuthClient::new(&market, &AuthConfig::default());
        let mut builder = auth.sign_up_builder();
        assert!(builder.email("student@gmail.com").is_err());
        assert_eq!(builder.draft().email, None);
    }

    #[tokio::test]
    async fn modify_with_nothing_set_is_rejected() {
        let market = market();
        let auth = AuthClient::new(&market, &AuthConfig::default());
        let error = auth.modify_builder().submit().await.expect_err("empty");
        assert_eq!(error.to_string(), "No account changes specified");
    }
}
