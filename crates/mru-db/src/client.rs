//! The backend client shared by every repository and builder.
//!
//! `MarketClient` is constructed once at startup from configuration and
//! passed by reference. It owns the HTTP connection pool, the project URL,
//! the anonymous key, and the current session's access token. Requests made
//! while signed in carry the user's token; otherwise the anonymous key is
//! used as the bearer.

use std::sync::RwLock;
use std::time::Duration;

use mru_config::{BackendConfig, StorageConfig};
use mru_core::{MarketError, MarketResult};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::adapter::{self, RawResponse};
use crate::http::read_response;
use crate::query::Query;

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// HTTP client for the hosted backend's data, auth, and storage APIs.
pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    schema: String,
    storage: StorageConfig,
    access_token: RwLock<Option<String>>,
}

impl MarketClient {
    /// Create a client for a validated backend section.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Transport` if the HTTP client cannot be built.
    pub fn new(backend: &BackendConfig, storage: &StorageConfig) -> MarketResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mru-exchange/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(backend.timeout_secs))
            .build()
            .map_err(|e| MarketError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: backend.base_url().to_string(),
            anon_key: backend.anon_key.clone(),
            schema: backend.schema.clone(),
            storage: storage.clone(),
            access_token: RwLock::new(None),
        })
    }

    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.http
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    #[must_use]
    pub fn schema(&self) -> &str {
        &self.schema
    }

    #[must_use]
    pub const fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Install (or clear) the access token used as the bearer.
    pub fn set_access_token(&self, token: Option<String>) {
        match self.access_token.write() {
            Ok(mut slot) => *slot = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    /// The current access token, if signed in.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        match self.access_token.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Bearer for the next request: the session token, else the anonymous key.
    fn bearer(&self) -> String {
        self.access_token()
            .unwrap_or_else(|| self.anon_key.clone())
    }

    /// Absolute URL for `path` below the project root (e.g. `auth/v1/user`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the `apikey` header and bearer to any backend request.
    #[must_use]
    pub fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer()))
    }

    fn build(&self, query: &Query) -> MarketResult<reqwest::RequestBuilder> {
        let mut url = reqwest::Url::parse(&self.url(&format!("rest/v1/{}", query.path())))
            .map_err(|e| MarketError::Transport(format!("invalid backend url: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params() {
                pairs.append_pair(&key, &value);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        let action = query.action();
        let mut request = self.authorize(self.http.request(action.method(), url));
        request = if action == crate::query::Action::Select {
            request.header("Accept-Profile", &self.schema)
        } else {
            request.header("Content-Profile", &self.schema)
        };
        if action.is_write() {
            request = request.header("Prefer", "return=representation");
        }
        if query.is_single() {
            request = request.header(ACCEPT, SINGLE_OBJECT);
        }
        if let Some(body) = query.body() {
            request = request.json(body);
        }
        Ok(request)
    }

    /// Send `query` and return the raw `{data, error}` pair.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Transport` when no response was received.
    pub async fn execute(&self, query: &Query) -> MarketResult<RawResponse> {
        tracing::debug!(%query, "data api request");
        let response = self
            .build(query)?
            .send()
            .await
            .map_err(|e| MarketError::Transport(e.to_string()))?;
        let raw = read_response(response).await?;
        if let Some(error) = &raw.error {
            tracing::debug!(entity = query.entity(), %error, code = ?error.code, "data api error");
        }
        Ok(raw)
    }

    /// Send `query` and adapt the response into `T`.
    ///
    /// # Errors
    ///
    /// See [`adapter::adapt`].
    pub async fn fetch<T: DeserializeOwned>(&self, query: Query) -> MarketResult<T> {
        let raw = self.execute(&query).await?;
        adapter::adapt(raw, query.entity())
    }

    /// Send `query`, discarding any returned rows.
    ///
    /// # Errors
    ///
    /// See [`adapter::adapt_unit`].
    pub async fn run(&self, query: Query) -> MarketResult<()> {
        let raw = self.execute(&query).await?;
        adapter::adapt_unit(raw, query.entity())
    }
}

impl std::fmt::Debug for MarketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketClient")
            .field("base_url", &self.base_url)
            .field("schema", &self.schema)
            .field("signed_in", &self.access_token().is_some())
            .finish_non_exhaustive()
    }
}
