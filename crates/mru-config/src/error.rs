use thiserror::Error;

/// Failures while loading or checking [`crate::MarketConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `MRU_*` variable could not be merged or extracted.
    #[error("failed to load MRU configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the caller needs is missing its required keys.
    #[error(
        "MRU {section} settings are missing; set them in config.toml or as MRU_{upper}__* variables",
        upper = section.to_uppercase()
    )]
    NotConfigured { section: String },

    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_names_env_prefix() {
        let error = ConfigError::NotConfigured {
            section: "backend".into(),
        };
        assert_eq!(
            error.to_string(),
            "MRU backend settings are missing; set them in config.toml or as MRU_BACKEND__* variables"
        );
    }
}
