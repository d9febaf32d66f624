use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;
const MAX_REFRESH_TOKEN_TTL_DAYS: i64 = 3650;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// HMAC secret for access tokens
    pub jwt_secret: String,
    pub port: u16,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_days: i64,
    pub refresh_token_purge_interval_secs: u64,
    /// Comma separated; empty or `*` allows any origin
    pub cors_allowed_origins: String,
    pub static_dir: String,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// | Variable                            | Default  |
    /// |-------------------------------------|----------|
    /// | `DATABASE_URL`                      | required |
    /// | `JWT_SECRET`                        | required |
    /// | `PORT`                              | `8080`   |
    /// | `ACCESS_TOKEN_TTL_SECS`             | `3600`   |
    /// | `REFRESH_TOKEN_TTL_DAYS`            | `60`     |
    /// | `REFRESH_TOKEN_PURGE_INTERVAL_SECS` | `3600`   |
    /// | `CORS_ALLOWED_ORIGINS`              | any      |
    /// | `STATIC_DIR`                        | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            port: parse_or(&lookup, "PORT", 8080)?,
            access_token_ttl_secs: parse_in_range(
                &lookup,
                "ACCESS_TOKEN_TTL_SECS",
                3600,
                1..=MAX_ACCESS_TOKEN_TTL_SECS,
            )?,
            refresh_token_ttl_days: parse_in_range(
                &lookup,
                "REFRESH_TOKEN_TTL_DAYS",
                60,
                1..=MAX_REFRESH_TOKEN_TTL_DAYS,
            )?,
            refresh_token_purge_interval_secs: parse_in_range(
                &lookup,
                "REFRESH_TOKEN_PURGE_INTERVAL_SECS",
                3600,
                1..=u64::MAX,
            )?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }

    pub fn access_token_ttl(&self) -> time::Duration {
        time::Duration::seconds(self.access_token_ttl_secs)
    }

    pub fn refresh_token_ttl(&self) -> time::Duration {
        time::Duration::days(self.refresh_token_ttl_days)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

/// Like [`parse_or`], but values outside `range` are rejected as invalid.
fn parse_in_range<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + ToString,
{
    let value = parse_or(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}
