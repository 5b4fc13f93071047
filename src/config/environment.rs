// ABOUTME: Environment configuration management for the backend service
// ABOUTME: Parses ports, database URL, JWT settings and CORS origins from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Environment-based configuration management for deployment

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::constants::auth::MAX_JWT_EXPIRY_HOURS;
use crate::constants::env_config;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed service
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
    pub const fn is_production(self) -> bool {
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

/// Type-safe database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string; anything without a `sqlite:` prefix is a file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Backend service configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
}

/// Bearer token settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret; generated and persisted when absent
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

/// Cross-origin settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a value fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let jwt_secret = env_config::jwt_secret();
        if jwt_secret.is_none() {
            warn!("JWT_SECRET not set; a generated secret will be stored in the database");
        }

        let config = Self {
            host: env_config::host(),
            http_port: env_config::http_port(),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_config::database_url()),
            },
            auth: AuthConfig {
                jwt_secret,
                jwt_expiry_hours: env_config::jwt_expiry_hours(),
            },
            cors: CorsConfig {
                allowed_origins: parse_origins(&env_config::cors_allowed_origins()),
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port or an expiry outside 1..=8760 hours
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be non-zero"));
        }
        if !(1..=MAX_JWT_EXPIRY_HOURS).contains(&self.auth.jwt_expiry_hours) {
            return Err(anyhow!(
                "JWT_EXPIRY_HOURS must be between 1 and {MAX_JWT_EXPIRY_HOURS}, got {}",
                self.auth.jwt_expiry_hours
            ));
        }
        if self.environment.is_production() && self.cors.allowed_origins.iter().any(|o| o == "*")
        {
            warn!("CORS allows any origin in production");
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "RecipeBook Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - Database: {}\n\
             - JWT Secret: {}\n\
             - JWT Expiry: {}h\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.database.url,
            if self.auth.jwt_secret.is_some() {
                "from environment"
            } else {
                "stored in database"
            },
            self.auth.jwt_expiry_hours,
            self.cors.allowed_origins.join(", ")
        )
    }
}

/// Split a comma separated origin list
#[must_use]
pub fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:5173, http://localhost:5174,"),
            vec!["http://localhost:5173", "http://localhost:5174"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("invalid"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        let file = DatabaseUrl::parse_url("sqlite:./data/test.db");
        assert!(!file.is_memory());
        assert_eq!(file.to_connection_string(), "sqlite:./data/test.db");

        assert!(DatabaseUrl::parse_url("sqlite::memory:").is_memory());
        assert_eq!(
            DatabaseUrl::parse_url("recipes.db").to_connection_string(),
            "sqlite:recipes.db"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        for key in ["HTTP_PORT", "PORT", "JWT_EXPIRY_HOURS", "CORS_ALLOWED_ORIGINS"] {
            env::remove_var(key);
        }

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.auth.jwt_expiry_hours, 720);
        assert_eq!(config.cors.allowed_origins.len(), 2);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_out_of_range_expiry() {
        env::set_var("JWT_EXPIRY_HOURS", "0");
        let result = ServerConfig::from_env();
        env::remove_var("JWT_EXPIRY_HOURS");

        assert!(result.is_err());
    }

    #[test]
    fn test_auth_config_debug_redacts_secret() {
        let auth = AuthConfig {
            jwt_secret: Some("super-secret".to_owned()),
            jwt_expiry_hours: 1,
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }
}
