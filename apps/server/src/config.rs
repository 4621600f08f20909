//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, once at process start.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port.
    pub port: u16,

    /// Document store connection URL.
    pub database_url: String,

    /// Logical store name. SQLite derives no schema from it; the diagnostic
    /// endpoint reports whether it was configured.
    pub database_name: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://kedai_kita.db?mode=rwc".to_string()),

            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "kedai_kita".to_string()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reads_environment() {
        env::set_var("PORT", "9123");
        env::set_var("DATABASE_URL", "sqlite://:memory:");
        env::set_var("DATABASE_NAME", "kedai_test");

        let config = ServerConfig::load().unwrap();
        assert_eq!(config.port, 9123);
        assert_eq!(config.database_url, "sqlite://:memory:");
        assert_eq!(config.database_name, "kedai_test");

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            ServerConfig::load(),
            Err(ConfigError::InvalidValue(_))
        ));

        env::remove_var("PORT");
        env::remove_var("DATABASE_URL");
        env::remove_var("DATABASE_NAME");
    }
}
