//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. The process-wide instance is
//! built once on first access through [`Config::global`].

use anyhow::Result;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;

/// Default credential lifetime: 24 hours
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Longest accepted credential lifetime: 365 days
pub const MAX_TOKEN_TTL_SECONDS: i64 = 365 * DEFAULT_TOKEN_TTL_SECONDS;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// HS256 signing secret for credentials
    pub jwt_secret: String,
    /// Credential lifetime in seconds (also the cookie max-age)
    pub token_ttl_seconds: i64,

    /// Comma-separated list of allowed CORS origins
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub environment: Environment,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_source(|key| env::var(key).ok())
    }

    /// Process-wide configuration, loaded from the environment on first call.
    ///
    /// Later calls return the same instance; a failed load is not cached, so
    /// the next call retries.
    pub fn global() -> Result<&'static Config> {
        CONFIG.get_or_try_init(Self::from_env)
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required", key))
        };

        let token_ttl_seconds = match lookup("TOKEN_TTL_SECONDS") {
            Some(raw) => {
                let ttl: i64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("TOKEN_TTL_SECONDS must be an integer"))?;
                if !(1..=MAX_TOKEN_TTL_SECONDS).contains(&ttl) {
                    anyhow::bail!(
                        "TOKEN_TTL_SECONDS must be between 1 and {}",
                        MAX_TOKEN_TTL_SECONDS
                    );
                }
                ttl
            }
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        let config = Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            token_ttl_seconds,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
            environment: lookup("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Development),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "carepath=debug".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
