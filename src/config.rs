use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Default demo credential. Replace via `[auth] api_keys` in config.toml.
pub const DEMO_API_KEY: &str = "DEMO-KEY-123";

const DEFAULT_CTA_URL: &str =
    "https://poe.com/Micro-API_Launchpad?utm_source=fortune_api&utm_medium=json&utm_campaign=demo";
const DEFAULT_CTA_SHORT: &str = "Try our bot → https://poe.com/Micro-API_Launchpad";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub promo: PromoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Static credential set for the pro endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_api_keys")]
    pub api_keys: Vec<String>,
}

/// Promotional metadata attached to every fortune response
#[derive(Debug, Clone, Deserialize)]
pub struct PromoConfig {
    #[serde(default = "default_cta_url")]
    pub cta_url: String,
    #[serde(default = "default_cta_short")]
    pub cta_short: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_api_keys() -> Vec<String> {
    vec![DEMO_API_KEY.to_string()]
}

fn default_cta_url() -> String {
    DEFAULT_CTA_URL.to_string()
}

fn default_cta_short() -> String {
    DEFAULT_CTA_SHORT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_keys: default_api_keys(),
        }
    }
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            cta_url: default_cta_url(),
            cta_short: default_cta_short(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` (or `$FORTUNE_CONFIG`),
    /// falling back to compiled defaults when the file is absent.
    pub fn load() -> Result<Self> {
        let path = std::env::var("FORTUNE_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_shipped_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.auth.api_keys, vec!["DEMO-KEY-123".to_string()]);
        assert!(cfg.promo.cta_url.starts_with("https://poe.com/"));
        assert_eq!(
            cfg.promo.cta_short,
            "Try our bot → https://poe.com/Micro-API_Launchpad"
        );
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9001
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.auth.api_keys, vec![DEMO_API_KEY.to_string()]);
    }

    #[test]
    fn auth_section_overrides_keys() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [auth]
            api_keys = ["PROD-KEY-1", "PROD-KEY-2"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.auth.api_keys.len(), 2);
        assert!(!cfg.auth.api_keys.contains(&DEMO_API_KEY.to_string()));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = AppConfig::load_from(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(cfg.server.port, 8000);
    }
}
