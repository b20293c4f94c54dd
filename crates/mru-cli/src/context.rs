use anyhow::Context;
use mru_auth::{AuthClient, AuthUser};
use mru_config::MarketConfig;
use mru_db::MarketClient;

/// Everything a command handler needs: the configuration and one shared
/// backend client.
pub struct AppContext {
    pub config: MarketConfig,
    pub market: MarketClient,
}

impl AppContext {
    pub fn init(config: MarketConfig) -> anyhow::Result<Self> {
        let backend = config.require_backend()?;
        let market = MarketClient::new(backend, &config.storage)?;
        Ok(Self { config, market })
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.market, &self.config.auth)
    }

    /// The signed-in user; commands acting on "my" rows need one.
    pub async fn require_user(&self) -> anyhow::Result<AuthUser> {
        self.auth()
            .current_user()
            .await
            .context("this command needs a signed-in user; run `mru auth login`")
    }
}
