/**
 * Server Configuration
 *
 * This module loads the server configuration from the environment once at
 * startup and reports anything unsafe about it.
 *
 * # Configuration Sources
 *
 * Environment variables (`PORT`, `JWT_SECRET`, `JWT_EXPIRES_IN`), usually
 * populated from a `.env` file by the binary before this runs.
 *
 * # Error Handling
 *
 * Invalid values are startup errors. A missing secret is not: the
 * placeholder default is used and a warning is logged.
 */

use crate::shared::config::{AppConfig, ConfigError};

/// Load the configuration from process environment variables
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the configuration through an arbitrary variable lookup
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = AppConfig::from_lookup(lookup).map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        e
    })?;

    if config.uses_default_secret() {
        tracing::warn!(
            "JWT_SECRET not set, using the placeholder secret. Override it outside local mocking."
        );
    }

    tracing::info!(
        "Configuration loaded: port = {}, token ttl = {}s",
        config.port,
        config.token_ttl.as_secs()
    );

    Ok(config)
}
