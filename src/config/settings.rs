//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Analytics tracking configuration
    pub analytics: AnalyticsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Analytics tracking configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsSettings {
    /// Seconds without a heartbeat before a session counts as stale (default: 300)
    pub session_ttl_secs: u64,

    /// Minimum seconds between two stale-session sweeps (default: 60)
    pub sweep_interval_secs: u64,

    /// Maximum number of page views kept in memory; oldest entries are
    /// dropped first (default: 1000)
    pub max_stored_views: usize,

    /// Number of entries returned in the popular-pages ranking (default: 10)
    pub popular_pages_limit: usize,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            session_ttl_secs: 300,
            sweep_interval_secs: 60,
            max_stored_views: 1000,
            popular_pages_limit: 10,
        }
    }
}

impl AnalyticsSettings {
    /// Session staleness threshold in milliseconds.
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl_secs as i64 * 1000
    }

    /// Minimum gap between sweeps in milliseconds.
    pub fn sweep_interval_ms(&self) -> i64 {
        self.sweep_interval_secs as i64 * 1000
    }
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if analytics limits are set to zero.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        // Determine the running environment
        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("analytics.session_ttl_secs", 300)?
            .set_default("analytics.sweep_interval_secs", 60)?
            .set_default("analytics.max_stored_views", 1000)?
            .set_default("analytics.popular_pages_limit", 10)?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Load from environment variables
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option(
                "server.host",
                std::env::var("SERVER_HOST").ok(),
            )?
            .set_override_option(
                "server.port",
                std::env::var("SERVER_PORT").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                if settings.analytics.max_stored_views == 0 {
                    return Err(ConfigError::Message(
                        "analytics.max_stored_views must be at least 1".into(),
                    ));
                }
                if settings.analytics.popular_pages_limit == 0 {
                    return Err(ConfigError::Message(
                        "analytics.popular_pages_limit must be at least 1".into(),
                    ));
                }
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
