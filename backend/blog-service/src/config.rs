/// Configuration management for Blog Service
///
/// Loads configuration from environment variables (a `.env` file is read by
/// the binary before this runs).
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::services::MissingOwnerPolicy;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Document store configuration
    pub database: DatabaseConfig,
    /// Feed pipeline configuration
    pub feed: FeedConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// MongoDB configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub url: String,
    /// Database holding the blog collections. When unset, the database in
    /// the connection string path is used, then `blog`.
    pub name: Option<String>,
    /// Server selection and connect timeout
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// `fail` or `skip`
    pub missing_owner_policy: String,
}

impl FeedConfig {
    pub fn policy(&self) -> Result<MissingOwnerPolicy> {
        self.missing_owner_policy
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
    }
}

impl CorsConfig {
    pub fn origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
    }
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_ms() -> u64 {
    3_000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        let app = AppConfig {
            env: app_env.clone(),
            host: lookup("BLOG_SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match lookup("BLOG_SERVICE_PORT") {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Failed to parse BLOG_SERVICE_PORT='{}'", raw))?,
                None => default_port(),
            },
        };

        let cors = {
            let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
                Some(value) => value,
                None if production => bail!("CORS_ALLOWED_ORIGINS must be set in production"),
                None => "http://localhost:3000".to_string(),
            };

            if production && allowed_origins.trim() == "*" {
                bail!("CORS_ALLOWED_ORIGINS cannot be '*' in production");
            }

            CorsConfig { allowed_origins }
        };

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").context("DATABASE_URL environment variable not set")?,
            name: lookup("DATABASE_NAME").filter(|name| !name.trim().is_empty()),
            timeout_ms: match lookup("DATABASE_TIMEOUT_MS") {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Failed to parse DATABASE_TIMEOUT_MS='{}'", raw))?,
                None => default_timeout_ms(),
            },
        };

        let feed = FeedConfig {
            missing_owner_policy: lookup("FEED_MISSING_OWNER_POLICY")
                .unwrap_or_else(|| MissingOwnerPolicy::default().to_string()),
        };
        feed.policy().context("Invalid FEED_MISSING_OWNER_POLICY")?;

        Ok(Config {
            app,
            cors,
            database,
            feed,
        })
    }
}
