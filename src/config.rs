// src/config.rs
use crate::domain::search::{DEFAULT_MAX_SLUG_LENGTH, SearchSlugPolicy};
use std::{env, path::PathBuf};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    schema_path: Option<PathBuf>,
    max_slug_length: usize,
    clear_warning_on_recompute: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://edc_search.db".into()
}

fn default_max_connections() -> u32 {
    4
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables, reading a `.env`
    /// file first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid("DATABASE_MAX_CONNECTIONS must be a positive integer".into())
            })?,
            None => default_max_connections(),
        };

        let schema_path = lookup("SEARCH_SLUG_SCHEMAS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let max_slug_length = match lookup("SEARCH_SLUG_MAX_LENGTH") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid("SEARCH_SLUG_MAX_LENGTH must be a positive integer".into())
            })?,
            None => DEFAULT_MAX_SLUG_LENGTH,
        };

        let clear_warning_on_recompute = lookup("SEARCH_SLUG_CLEAR_WARNING")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            database_max_connections,
            schema_path,
            max_slug_length,
            clear_warning_on_recompute,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn schema_path(&self) -> Option<&PathBuf> {
        self.schema_path.as_ref()
    }

    /// Schema path, required by the slug updater binary.
    pub fn require_schema_path(&self) -> Result<&PathBuf, ConfigError> {
        self.schema_path
            .as_ref()
            .ok_or(ConfigError::Missing("SEARCH_SLUG_SCHEMAS"))
    }

    pub fn slug_policy(&self) -> SearchSlugPolicy {
        SearchSlugPolicy {
            max_length: self.max_slug_length,
            clear_warning_on_recompute: self.clear_warning_on_recompute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite://edc_search.db");
        assert_eq!(config.database_max_connections(), 4);
        assert!(config.schema_path().is_none());
        assert_eq!(config.slug_policy(), SearchSlugPolicy::default());
        assert!(matches!(
            config.require_schema_path(),
            Err(ConfigError::Missing("SEARCH_SLUG_SCHEMAS"))
        ));
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SEARCH_SLUG_SCHEMAS", "schemas.json"),
            ("SEARCH_SLUG_MAX_LENGTH", "100"),
            ("SEARCH_SLUG_CLEAR_WARNING", "TRUE"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.require_schema_path().unwrap(), &PathBuf::from("schemas.json"));
        let policy = config.slug_policy();
        assert_eq!(policy.max_length, 100);
        assert!(policy.clear_warning_on_recompute);
    }

    #[test]
    fn rejects_zero_max_length() {
        let err = config(&[("SEARCH_SLUG_MAX_LENGTH", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = config(&[("SEARCH_SLUG_MAX_LENGTH", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
