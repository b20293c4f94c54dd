//! Auth API calls and session lifecycle.
//!
//! [`AuthClient`] wraps the shared [`MarketClient`]: a successful sign-in or
//! refresh installs the access token on it, so every later data request is
//! made as the signed-in user. Session changes are broadcast as
//! [`AuthEvent`]s.

use mru_config::AuthConfig;
use mru_core::entities::UserProfile;
use mru_core::{MarketError, MarketResult, validate};
use mru_db::http::read_response;
use mru_db::{MarketClient, RawResponse, adapter};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tokio::sync::broadcast;

use crate::error::AuthError;
use crate::events::{AuthEvent, EVENT_CAPACITY};
use crate::refresh::{EXPIRY_BUFFER_SECS, needs_refresh};
use crate::session::{AuthUser, Session, SignUpOutcome, UserMetadata, UserUpdate};
use crate::token_store::{StoredSession, TokenSource, TokenStore};

const ENTITY: &str = "auth user";

#[derive(Debug)]
pub struct AuthClient<'a> {
    client: &'a MarketClient,
    config: AuthConfig,
    store: TokenStore,
    events: broadcast::Sender<AuthEvent>,
}

impl<'a> AuthClient<'a> {
    #[must_use]
    pub fn new(client: &'a MarketClient, config: &AuthConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            client,
            config: config.clone(),
            store: TokenStore::new(&config.keyring_service),
            events,
        }
    }

    /// Replace the session store (tests use a file-only store).
    #[must_use]
    pub fn with_store(mut self, store: TokenStore) -> Self {
        self.store = store;
        self
    }

    #[must_use]
    pub const fn market(&self) -> &'a MarketClient {
        self.client
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn emit(&self, event: AuthEvent) {
        // No subscribers is fine.
        self.events.send(event).ok();
    }

    async fn call<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> MarketResult<RawResponse> {
        let mut url = reqwest::Url::parse(&self.client.url(&format!("auth/v1/{path}")))
            .map_err(|e| MarketError::Transport(format!("invalid backend url: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        tracing::debug!(%method, path, "auth api request");
        let mut request = self.client.authorize(self.client.http().request(method, url));
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| MarketError::Transport(e.to_string()))?;
        read_response(response).await
    }

    async fn fetch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> MarketResult<T> {
        adapter::adapt(self.call(method, path, query, body).await?, ENTITY)
    }

    fn install(&self, session: &Session) {
        self.client
            .set_access_token(Some(session.access_token.clone()));
        if let Err(error) = self.store.save(&StoredSession::from(session)) {
            tracing::warn!(%error, "session not persisted; sign-in lasts for this run only");
        }
    }

    /// Register a new account. The institutional domain is checked before
    /// anything is sent.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        metadata: &UserMetadata,
    ) -> MarketResult<SignUpOutcome> {
        let email = validate::email(&mut None, email)?;
        let password = validate::password(&mut None, password)?;
        let redirect = self.config.signup_redirect();
        let data: Value = self
            .fetch(
                Method::POST,
                "signup",
                &[("redirect_to", redirect.as_str())],
                Some(&json!({"email": email, "password": password, "data": metadata})),
            )
            .await?;

        if data.get("access_token").is_some() {
            let session: Session =
                serde_json::from_value(data).map_err(|e| MarketError::Decode(e.to_string()))?;
            self.install(&session);
            self.emit(AuthEvent::SignedIn(session.user.clone()));
            return Ok(SignUpOutcome::SignedIn(session));
        }
        // Some deployments nest the user, others return it bare.
        let user = data.get("user").cloned().unwrap_or(data);
        let user: AuthUser =
            serde_json::from_value(user).map_err(|e| MarketError::Decode(e.to_string()))?;
        tracing::info!(user = %user.id, "sign-up pending email confirmation");
        Ok(SignUpOutcome::PendingConfirmation(user))
    }

    /// Password grant.
    pub async fn sign_in(&self, email: &str, password: &str) -> MarketResult<Session> {
        let email = validate::email(&mut None, email)?;
        let password = validate::password_present(&mut None, password)?;
        let session: Session = self
            .fetch(
                Method::POST,
                "token",
                &[("grant_type", "password")],
                Some(&json!({"email": email, "password": password})),
            )
            .await?;
        self.install(&session);
        self.emit(AuthEvent::SignedIn(session.user.clone()));
        Ok(session)
    }

    /// Refresh-token grant.
    pub async fn refresh(&self, refresh_token: &str) -> MarketResult<Session> {
        let session: Session = self
            .fetch(
                Method::POST,
                "token",
                &[("grant_type", "refresh_token")],
                Some(&json!({"refresh_token": refresh_token})),
            )
            .await?;
        self.install(&session);
        self.emit(AuthEvent::TokenRefreshed);
        Ok(session)
    }

    /// Pick up a stored session, refreshing it if it is about to expire.
    ///
    /// Returns where the session came from, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// `MarketError::Session` when the stored token has expired and cannot be
    /// refreshed; any auth API error from the refresh itself.
    pub async fn restore(&self) -> MarketResult<Option<TokenSource>> {
        let Some((stored, source)) = self.store.load() else {
            return Ok(None);
        };
        if !needs_refresh(&stored.access_token, EXPIRY_BUFFER_SECS) {
            self.client.set_access_token(Some(stored.access_token));
            return Ok(Some(source));
        }
        match stored.refresh_token {
            Some(refresh_token) => {
                tracing::debug!(%source, "stored session near expiry; refreshing");
                self.refresh(&refresh_token).await?;
                Ok(Some(source))
            }
            None => Err(AuthError::TokenExpired.into()),
        }
    }

    /// End the session on the backend and forget it locally. Local state is
    /// cleared even when the backend call fails.
    pub async fn sign_out(&self) -> MarketResult<()> {
        let remote = if self.client.access_token().is_some() {
            let raw = self
                .call::<Value>(Method::POST, "logout", &[], None)
                .await;
            raw.and_then(|raw| adapter::adapt_unit(raw, ENTITY))
        } else {
            Ok(())
        };
        self.client.set_access_token(None);
        self.store.delete()?;
        self.emit(AuthEvent::SignedOut);
        remote
    }

    /// The signed-in user, fresh from the auth API.
    pub async fn current_user(&self) -> MarketResult<AuthUser> {
        if self.client.access_token().is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }
        self.fetch::<_, Value>(Method::GET, "user", &[], None).await
    }

    /// The signed-in user's marketplace profile.
    pub async fn current_profile(&self) -> MarketResult<UserProfile> {
        let user = self.current_user().await?;
        self.client.profile(&user.id).await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> MarketResult<AuthUser> {
        if self.client.access_token().is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }
        let user: AuthUser = self
            .fetch(Method::PUT, "user", &[], Some(update))
            .await?;
        self.emit(AuthEvent::UserUpdated(user.clone()));
        Ok(user)
    }

    /// Send a password reset link.
    pub async fn recover(&self, email: &str) -> MarketResult<()> {
        let email = validate::email(&mut None, email)?;
        let redirect = self.config.reset_redirect();
        let raw = self
            .call(
                Method::POST,
                "recover",
                &[("redirect_to", redirect.as_str())],
                Some(&json!({"email": email})),
            )
            .await?;
        adapter::adapt_unit(raw, ENTITY)
    }

    /// Re-send the sign-up confirmation email.
    pub async fn resend_confirmation(&self, email: &str) -> MarketResult<()> {
        let email = validate::email(&mut None, email)?;
        let redirect = self.config.signup_redirect();
        let raw = self
            .call(
                Method::POST,
                "resend",
                &[("redirect_to", redirect.as_str())],
                Some(&json!({"type": "signup", "email": email})),
            )
            .await?;
        adapter::adapt_unit(raw, ENTITY)
    }
}
