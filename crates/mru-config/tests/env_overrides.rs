//! Environment and TOML layering, sandboxed with `figment::Jail`.

use figment::Jail;
use mru_config::{ConfigError, MarketConfig};
use pretty_assertions::assert_eq;

#[test]
fn prefixed_env_fills_backend() {
    Jail::expect_with(|jail| {
        jail.set_env("MRU_BACKEND__URL", "https://abcd.supabase.co");
        jail.set_env("MRU_BACKEND__ANON_KEY", "anon-key");
        jail.set_env("MRU_BACKEND__TIMEOUT_SECS", "3");

        let config = MarketConfig::load().expect("config loads");
        let backend = config.require_backend().expect("configured");
        assert_eq!(backend.url, "https://abcd.supabase.co");
        assert_eq!(backend.anon_key, "anon-key");
        assert_eq!(backend.timeout_secs, 3);
        Ok(())
    });
}

#[test]
fn bare_supabase_variables_are_accepted() {
    Jail::expect_with(|jail| {
        jail.set_env("VITE_SUPABASE_URL", "https://web.supabase.co");
        jail.set_env("VITE_SUPABASE_ANON_KEY", "web-anon");

        let config = MarketConfig::load().expect("config loads");
        assert_eq!(config.backend.url, "https://web.supabase.co");
        assert_eq!(config.backend.anon_key, "web-anon");
        Ok(())
    });
}

#[test]
fn prefixed_env_beats_bare_variables() {
    Jail::expect_with(|jail| {
        jail.set_env("SUPABASE_URL", "https://bare.supabase.co");
        jail.set_env("MRU_BACKEND__URL", "https://prefixed.supabase.co");

        let config = MarketConfig::load().expect("config loads");
        assert_eq!(config.backend.url, "https://prefixed.supabase.co");
        Ok(())
    });
}

#[test]
fn project_toml_is_layered_under_env() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mru")?;
        jail.create_file(
            ".mru/config.toml",
            r#"
[backend]
url = "https://toml.supabase.co"
anon_key = "toml-key"
schema = "mru_prod"

[storage]
product_bucket = "listing-photos"

[auth]
redirect_origin = "https://exchange.example"
"#,
        )?;
        jail.set_env("MRU_BACKEND__ANON_KEY", "env-key");

        let config = MarketConfig::load().expect("config loads");
        assert_eq!(config.backend.url, "https://toml.supabase.co");
        assert_eq!(config.backend.anon_key, "env-key");
        assert_eq!(config.backend.schema, "mru_prod");
        assert_eq!(config.storage.product_bucket, "listing-photos");
        assert_eq!(config.storage.profile_bucket, "profile-pictures");
        assert_eq!(
            config.auth.signup_redirect(),
            "https://exchange.example/home"
        );
        Ok(())
    });
}

#[test]
fn missing_backend_is_fatal() {
    Jail::expect_with(|_jail| {
        let config = MarketConfig::load().expect("config loads");
        let error = config.require_backend().expect_err("not configured");
        assert!(matches!(error, ConfigError::NotConfigured { ref section } if section == "backend"));
        Ok(())
    });
}
