//! Application configuration module
//!
//! Provides the configuration read once at startup: listening port,
//! token signing secret and token time-to-live.

use std::time::Duration;
use thiserror::Error;

/// Listening port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Placeholder signing secret used when `JWT_SECRET` is not set
///
/// Any deployment beyond local mocking must override it.
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-prod";

/// Token lifetime used when `JWT_EXPIRES_IN` is not set (one hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Secret used to sign and verify tokens
    pub jwt_secret: String,
    /// How long an issued token stays valid
    pub token_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Unset variables fall back to their defaults; set but invalid
    /// variables are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
            builder = builder.port(port);
        }

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }

        if let Some(expires_in) = lookup("JWT_EXPIRES_IN") {
            builder = builder.token_ttl(parse_ttl(&expires_in)?);
        }

        builder.build()
    }

    /// Whether the placeholder signing secret is still in use
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.token_ttl < Duration::from_secs(1) {
            return Err(ConfigError::InvalidDuration(format!(
                "{}ms",
                self.token_ttl.as_millis()
            )));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token time-to-live
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            port: self.port.unwrap_or(defaults.port),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            token_ttl: self.token_ttl.unwrap_or(defaults.token_ttl),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a token lifetime such as `"1h"`, `"30 minutes"` or `"3600"`
///
/// A bare number is a count of seconds. Sub-second remainders are kept
/// here and rejected later by [`AppConfig::validate`] if the total is
/// under one second.
pub fn parse_ttl(value: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidDuration(value.to_string());

    let trimmed = value.trim().to_lowercase();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let amount: f64 = number.parse().map_err(|_| invalid())?;
    let millis_per_unit = match unit.trim() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "" | "s" | "sec" | "secs" | "second" | "seconds" => 1_000.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60_000.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600_000.0,
        "d" | "day" | "days" => 86_400_000.0,
        "w" | "week" | "weeks" => 604_800_000.0,
        "y" | "yr" | "yrs" | "year" | "years" => 31_557_600_000.0,
        _ => return Err(invalid()),
    };

    Duration::try_from_secs_f64(amount * millis_per_unit / 1_000.0).map_err(|_| invalid())
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("invalid duration: {0}")]
    InvalidDuration(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
