//! Environment-based configuration.
//!
//! Values are read from the process environment (optionally populated from a `.env` file by
//! `dotenvy` in `main`). Parsing goes through [`Config::from_lookup`] so it can be exercised in
//! tests without touching the real environment.

use std::time::Duration;

use crate::server::{
    error::config::ConfigError,
    model::app::PlayerDatabaseSettings,
    util::tag::PlayerTag,
};

const DEFAULT_HOME_CLAN_TAG: &str = "#2PR8R8V8P";
const DEFAULT_CLASH_API_URL: &str = "https://api.clashofclans.com/v1";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5050";
const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 3000;
const DEFAULT_LOOKUP_CONCURRENCY: usize = 5;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub user_agent: String,
    pub home_clan_tag: PlayerTag,
    pub include_historical: bool,
    pub clash_api_url: String,
    /// Live name lookups are disabled when no token is configured
    pub clash_api_token: Option<String>,
    pub clash_lookup_timeout: Duration,
    pub clash_lookup_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A value failed to parse or validate
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url =
            var("DATABASE_URL").ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".into()))?;

        let raw_clan_tag = var("HOME_CLAN_TAG").unwrap_or_else(|| DEFAULT_HOME_CLAN_TAG.into());
        let home_clan_tag = PlayerTag::normalize(&raw_clan_tag)
            .filter(PlayerTag::is_valid_clash_tag)
            .ok_or_else(|| ConfigError::InvalidEnvValue {
                var: "HOME_CLAN_TAG".into(),
                reason: format!("{:?} is not a valid clan tag", raw_clan_tag),
            })?;

        let include_historical = match var("PLAYER_DATABASE_INCLUDE_HISTORICAL") {
            Some(value) => parse_bool("PLAYER_DATABASE_INCLUDE_HISTORICAL", &value)?,
            None => false,
        };

        let lookup_timeout_ms = match var("COC_LOOKUP_TIMEOUT_MS") {
            Some(value) => parse_positive("COC_LOOKUP_TIMEOUT_MS", &value)?,
            None => DEFAULT_LOOKUP_TIMEOUT_MS,
        };

        let clash_lookup_concurrency = match var("COC_LOOKUP_CONCURRENCY") {
            Some(value) => parse_positive("COC_LOOKUP_CONCURRENCY", &value)? as usize,
            None => DEFAULT_LOOKUP_CONCURRENCY,
        };

        Ok(Self {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into()),
            user_agent: var("USER_AGENT").unwrap_or_else(|| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
            home_clan_tag,
            include_historical,
            clash_api_url: var("COC_API_URL").unwrap_or_else(|| DEFAULT_CLASH_API_URL.into()),
            clash_api_token: var("COC_API_TOKEN"),
            clash_lookup_timeout: Duration::from_millis(lookup_timeout_ms),
            clash_lookup_concurrency,
        })
    }

    /// Per-request defaults for the player database service.
    pub fn player_database_settings(&self) -> PlayerDatabaseSettings {
        PlayerDatabaseSettings {
            home_clan_tag: self.home_clan_tag.clone(),
            include_historical: self.include_historical,
            lookup_concurrency: self.clash_lookup_concurrency,
            lookup_timeout: self.clash_lookup_timeout,
        }
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.into(),
            reason: format!("{:?} is not a boolean", value),
        }),
    }
}

fn parse_positive(var: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidEnvValue {
            var: var.into(),
            reason: format!("{:?} is not a positive integer", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/clanboard")]).unwrap();

        assert_eq!(config.home_clan_tag.as_str(), DEFAULT_HOME_CLAN_TAG);
        assert!(!config.include_historical);
        assert_eq!(config.clash_api_url, DEFAULT_CLASH_API_URL);
        assert_eq!(config.clash_api_token, None);
        assert_eq!(config.clash_lookup_timeout, Duration::from_millis(3000));
        assert_eq!(config.clash_lookup_concurrency, 5);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
    }

    #[test]
    fn missing_database_url() {
        let result = config_from(&[]);
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    #[test]
    fn normalizes_home_clan_tag() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/clanboard"),
            ("HOME_CLAN_TAG", " l2y0qvg8 "),
        ])
        .unwrap();

        assert_eq!(config.home_clan_tag.as_str(), "#L2Y0QVG8");
    }

    #[test]
    fn rejects_invalid_home_clan_tag() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/clanboard"),
            ("HOME_CLAN_TAG", "#INVALID123"),
        ]);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "HOME_CLAN_TAG"
        ));
    }

    #[test]
    fn parses_lookup_settings_and_mode_flag() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/clanboard"),
            ("COC_API_TOKEN", "token"),
            ("COC_LOOKUP_TIMEOUT_MS", "1500"),
            ("COC_LOOKUP_CONCURRENCY", "2"),
            ("PLAYER_DATABASE_INCLUDE_HISTORICAL", "TRUE"),
        ])
        .unwrap();

        let settings = config.player_database_settings();
        assert_eq!(config.clash_api_token.as_deref(), Some("token"));
        assert_eq!(settings.lookup_timeout, Duration::from_millis(1500));
        assert_eq!(settings.lookup_concurrency, 2);
        assert!(settings.include_historical);
    }

    #[test]
    fn rejects_zero_concurrency() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/clanboard"),
            ("COC_LOOKUP_CONCURRENCY", "0"),
        ]);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "COC_LOOKUP_CONCURRENCY"
        ));
    }

    #[test]
    fn rejects_unparseable_boolean() {
        let result = config_from(&[
            ("DATABASE_URL", "postgres://localhost/clanboard"),
            ("PLAYER_DATABASE_INCLUDE_HISTORICAL", "sometimes"),
        ]);

        assert!(result.is_err());
    }
}
