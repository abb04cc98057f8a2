// ABOUTME: Environment configuration for the Recipe Journal server
// ABOUTME: Parses ports, database location, pool size, CORS origins, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Journal

//! Environment-based configuration management
//!
//! Configuration is read from environment variables only. Every value has a
//! default, so an empty environment yields a working development server backed
//! by `./data/recipes.db`.

use crate::constants::{defaults, env_config};
use journal_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Default operational logging
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error if the URL names an unsupported backend or an empty path
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();

        if let Some(path_str) = trimmed.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            return match path_str {
                ":memory:" => Ok(Self::Memory),
                "" => Err(AppError::config_invalid("DATABASE_URL has an empty path")),
                path => Ok(Self::SQLite {
                    path: PathBuf::from(path),
                }),
            };
        }

        if trimmed.contains("://") {
            return Err(AppError::config_invalid(format!(
                "Unsupported DATABASE_URL scheme: {trimmed}"
            )));
        }

        if trimmed.is_empty() {
            return Err(AppError::config_invalid("DATABASE_URL is empty"));
        }

        // Bare path: treat as SQLite file
        Ok(Self::SQLite {
            path: PathBuf::from(trimmed),
        })
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".into(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/recipes.db"),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Upper bound on pooled connections
    pub max_connections: u32,
    /// Create tables on startup
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DEFAULT_MAX_CONNECTIONS,
            auto_migrate: true,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.into(),
            http_port: defaults::DEFAULT_HTTP_PORT,
            log_level: LogLevel::default(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let database_url = DatabaseUrl::parse_url(&env_config::database_url())?;

        let max_connections: u32 = parse_value(
            "DATABASE_MAX_CONNECTIONS",
            &env_config::database_max_connections(),
        )?;
        if max_connections == 0 {
            return Err(AppError::config_invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1",
            ));
        }

        let config = Self {
            host: env_config::host(),
            http_port: parse_value("HTTP_PORT", &env_config::http_port())?,
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                auto_migrate: parse_value("AUTO_MIGRATE", &env_var_or("AUTO_MIGRATE", "true"))?,
            },
            cors: CorsConfig {
                allowed_origins: env_config::cors_allowed_origins(),
            },
        };

        info!("Configuration loaded for {} environment", config.environment);
        Ok(config)
    }

    /// Address the HTTP listener binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Recipe Journal Configuration:\n\
             - Bind Address: {}\n\
             - Log Level: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - Max Connections: {}\n\
             - Auto Migrate: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.log_level,
            self.environment,
            self.database.url,
            self.database.max_connections,
            self.database.auto_migrate,
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_value<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::errors::ErrorCode;

    #[test]
    fn test_parse_sqlite_file_url() {
        let url = DatabaseUrl::parse_url("sqlite:./data/test.db").unwrap();
        assert_eq!(
            url,
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/test.db")
            }
        );
        assert_eq!(url.to_connection_string(), "sqlite:./data/test.db");
    }

    #[test]
    fn test_parse_memory_url() {
        let url = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
        assert!(url.is_memory());
        assert_eq!(url.to_connection_string(), "sqlite::memory:");
    }

    #[test]
    fn test_parse_bare_path_and_double_slash() {
        assert_eq!(
            DatabaseUrl::parse_url("recipes.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("recipes.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite://recipes.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("recipes.db")
            }
        );
    }

    #[test]
    fn test_parse_rejects_other_backends() {
        let error = DatabaseUrl::parse_url("mongodb://localhost/recipes").unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);

        assert!(DatabaseUrl::parse_url("sqlite:").is_err());
        assert!(DatabaseUrl::parse_url("   ").is_err());
    }

    #[test]
    fn test_parse_value_reports_key() {
        let error = parse_value::<u16>("HTTP_PORT", "eighty").unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
        assert!(error.message.contains("HTTP_PORT"));

        assert_eq!(parse_value::<u16>("HTTP_PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_log_level_and_environment_fallbacks() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("chatty"), LogLevel::Info);
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_mentions_database() {
        let config = ServerConfig::default();
        let summary = config.summary();
        assert!(summary.contains("sqlite:./data/recipes.db"));
        assert!(summary.contains("0.0.0.0:7890"));
    }
}
