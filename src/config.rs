//! Application configuration loaded from environment variables.
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `DATABASE_URL` | No | `sqlite://schrodinger.db` |
//! | `PORT` | No | 8080 |
//! | `CORS_ORIGIN` | Yes | - |
//! | `DOMAIN` | Yes | - |

use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://schrodinger.db";
const DEFAULT_PORT: u16 = 8080;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// sqlx connection URL for the SQLite database
    pub database_url: String,
    /// Server port
    pub port: u16,
    /// Value sent in `Access-Control-Allow-Origin`
    pub cors_origin: String,
    /// Public base URL used to build resource links
    pub domain: String,
}

impl Config {
    /// Config for tests: in-memory database and localhost URLs.
    pub fn test_default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            port: DEFAULT_PORT,
            cors_origin: "http://localhost:3000".to_string(),
            domain: "http://localhost:8080".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port,
            cors_origin: env::var("CORS_ORIGIN")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("CORS_ORIGIN"))?,
            domain: env::var("DOMAIN")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("DOMAIN"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything lives in one test.
    #[test]
    fn test_config_from_env() {
        env::set_var("CORS_ORIGIN", "https://box.example.org");
        env::set_var("DOMAIN", "https://api.example.org/");
        env::remove_var("PORT");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.cors_origin, "https://box.example.org");
        assert_eq!(config.domain, "https://api.example.org");
        assert_eq!(config.port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));
        env::remove_var("PORT");

        env::remove_var("DOMAIN");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("DOMAIN"))
        ));
    }
}
