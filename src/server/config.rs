use std::time::Duration;
use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    service::listing::ListingSettings,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CACHE_TTL_SECONDS: u64 = 30;
const DEFAULT_CACHE_CAPACITY: usize = 10_000;
const DEFAULT_QUERY_TIMEOUT_SECONDS: u64 = 5;

pub struct Config {
    pub database_url: String,
    /// Public base URL that self links are built on. Always ends with `/`.
    pub app_url: Url,
    pub bind_address: String,

    pub cache_ttl: Duration,
    pub cache_capacity: usize,
    pub query_timeout: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and well-formed
    /// - `Err(AppError::ConfigErr)` - Missing or malformed variable
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let mut app_url = required("APP_URL")?;
        if !app_url.ends_with('/') {
            app_url.push('/');
        }
        let app_url = Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cache_ttl: Duration::from_secs(parse_or(
                &lookup,
                "CACHE_TTL_SECONDS",
                DEFAULT_CACHE_TTL_SECONDS,
            )?),
            cache_capacity: parse_or(&lookup, "CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY)?,
            query_timeout: Duration::from_secs(parse_or(
                &lookup,
                "QUERY_TIMEOUT_SECONDS",
                DEFAULT_QUERY_TIMEOUT_SECONDS,
            )?),
        })
    }

    pub fn listing_settings(&self) -> ListingSettings {
        ListingSettings {
            cache_ttl: self.cache_ttl,
            query_timeout: self.query_timeout,
        }
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
