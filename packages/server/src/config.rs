use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_INSTAGRAM_HANDLE: &str = "bbcnews";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,server_core=debug";

/// Application configuration loaded from environment variables.
///
/// Vendor credentials are all optional: a missing key only disables the
/// component that needs it, never the process.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub default_instagram_handle: String,
    pub apify_api_key: Option<String>,
    pub groq_api_key: Option<String>,
    pub llm_model: String,
    pub llm_base_url: Option<String>,
    pub twitter_api_key: Option<String>,
    pub twitter_api_secret: Option<String>,
    pub twitter_access_token: Option<String>,
    pub twitter_access_token_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            default_instagram_handle: var("DEFAULT_INSTAGRAM_HANDLE")
                .unwrap_or_else(|| DEFAULT_INSTAGRAM_HANDLE.to_string()),
            apify_api_key: var("APIFY_API_KEY"),
            groq_api_key: var("GROQ_API_KEY"),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| llm_client::DEFAULT_MODEL.to_string()),
            llm_base_url: var("LLM_BASE_URL"),
            twitter_api_key: var("TWITTER_API_KEY"),
            twitter_api_secret: var("TWITTER_API_SECRET"),
            twitter_access_token: var("TWITTER_ACCESS_TOKEN"),
            twitter_access_token_secret: var("TWITTER_ACCESS_TOKEN_SECRET"),
        })
    }

    pub fn twitter_credentials(&self) -> Option<twitter_client::Credentials> {
        twitter_client::Credentials::from_parts(
            self.twitter_api_key.clone(),
            self.twitter_api_secret.clone(),
            self.twitter_access_token.clone(),
            self.twitter_access_token_secret.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.default_instagram_handle, "bbcnews");
        assert_eq!(config.llm_model, "llama-3.3-70b-versatile");
        assert!(config.apify_api_key.is_none());
        assert!(config.groq_api_key.is_none());
        assert!(config.twitter_credentials().is_none());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("APIFY_API_KEY", "  "), ("GROQ_API_KEY", "gsk")]).unwrap();

        assert!(config.apify_api_key.is_none());
        assert_eq!(config.groq_api_key.as_deref(), Some("gsk"));
    }

    #[test]
    fn test_twitter_credentials_need_all_four() {
        let partial = config_from(&[
            ("TWITTER_API_KEY", "k"),
            ("TWITTER_API_SECRET", "s"),
            ("TWITTER_ACCESS_TOKEN", "t"),
        ])
        .unwrap();
        assert!(partial.twitter_credentials().is_none());

        let full = config_from(&[
            ("TWITTER_API_KEY", "k"),
            ("TWITTER_API_SECRET", "s"),
            ("TWITTER_ACCESS_TOKEN", "t"),
            ("TWITTER_ACCESS_TOKEN_SECRET", "ts"),
        ])
        .unwrap();
        assert!(full.twitter_credentials().is_some());
    }

    #[test]
    fn test_default_log_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).unwrap();
        assert_eq!(
            filter.max_level_hint(),
            Some(tracing_subscriber::filter::LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }
}
