//! Server settings loaded from environment variables.
//!
//! Every setting has a default, so the service starts with an empty environment. Values
//! are read through a lookup function, which keeps parsing testable without mutating the
//! process environment.

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Pause applied before single-entity reads unless `SIMULATED_LATENCY_MS` says otherwise.
pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1000;

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// `SeaORM` connection string.
    pub database_url: String,
    /// HTTP server host address.
    pub app_host: String,
    /// HTTP server port.
    pub app_port: u16,
    /// Artificial pause before single-entity reads; zero disables it.
    pub simulated_latency: Duration,
    /// TOML file used to seed ingredients and boards at startup.
    pub menu_path: PathBuf,
    /// Directory that order confirmations are written to; confirmations are only
    /// logged when unset.
    pub notification_outbox: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            app_host: "0.0.0.0".to_string(),
            app_port: 8080,
            simulated_latency: Duration::from_millis(DEFAULT_SIMULATED_LATENCY_MS),
            menu_path: PathBuf::from("menu.toml"),
            notification_outbox: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: connection string (default: local `SQLite` file)
    /// - `APP_HOST`: server host (default: "0.0.0.0")
    /// - `APP_PORT`: server port (default: 8080)
    /// - `SIMULATED_LATENCY_MS`: read delay in milliseconds (default: 1000)
    /// - `MENU_PATH`: seed file (default: "menu.toml")
    /// - `NOTIFICATION_OUTBOX`: confirmation outbox directory (optional)
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let latency_ms = parse_or(&lookup, "SIMULATED_LATENCY_MS", DEFAULT_SIMULATED_LATENCY_MS)?;

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            app_host: lookup("APP_HOST").unwrap_or(defaults.app_host),
            app_port: parse_or(&lookup, "APP_PORT", defaults.app_port)?,
            simulated_latency: Duration::from_millis(latency_ms),
            menu_path: lookup("MENU_PATH").map_or(defaults.menu_path, PathBuf::from),
            notification_outbox: lookup("NOTIFICATION_OUTBOX")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Address the HTTP listener binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| Error::Config {
            message: format!("Invalid value for {key}: {e}"),
        }),
    }
}
