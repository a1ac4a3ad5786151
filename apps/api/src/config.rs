use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON catalog to load instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Enables the LLM-backed coaching endpoints when present.
    pub anthropic_api_key: Option<String>,
    /// Empty means any origin.
    pub cors_allow_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match optional(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => 8080,
        };

        Ok(Config {
            port,
            rust_log: optional(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: optional(&lookup, "CATALOG_PATH").map(PathBuf::from),
            anthropic_api_key: optional(&lookup, "ANTHROPIC_API_KEY"),
            cors_allow_origins: optional(&lookup, "CORS_ALLOW_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

/// Treats unset and blank variables the same.
fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `*` (alone or in the list) allows any origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
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
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.catalog_path.is_none());
        assert!(config.anthropic_api_key.is_none());
        assert!(config.cors_allow_origins.is_empty());
    }

    #[test]
    fn test_invalid_port_is_error() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_blank_api_key_treated_as_unset() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_cors_origin_list() {
        let config = config_from(&[(
            "CORS_ALLOW_ORIGINS",
            "http://localhost:5173, https://app.example.com",
        )])
        .unwrap();
        assert_eq!(
            config.cors_allow_origins,
            vec!["http://localhost:5173", "https://app.example.com"]
        );
    }

    #[test]
    fn test_cors_wildcard_allows_any() {
        assert!(parse_origins("*").is_empty());
        assert!(parse_origins("http://a.test,*").is_empty());
    }

    #[test]
    fn test_catalog_path_and_port() {
        let config = config_from(&[("CATALOG_PATH", "/etc/skillbridge/catalog.json"), ("PORT", "9000")])
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.catalog_path.unwrap(),
            PathBuf::from("/etc/skillbridge/catalog.json")
        );
    }
}
