use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

/// Settings that are not tied to a backend service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows printed by CLI list commands when `--limit` is absent.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_limit_defaults_to_twenty() {
        assert_eq!(GeneralConfig::default().default_limit, 20);
    }

    #[test]
    fn missing_limit_falls_back_when_deserializing() {
        let config: GeneralConfig = figment::Figment::new().extract().expect("empty section");
        assert_eq!(config.default_limit, 20);
    }
}
