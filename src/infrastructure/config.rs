//! Application configuration

use std::env;

use anyhow::{Context, Result};

/// PostgreSQL connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    /// Database name
    pub name: String,
    pub user: String,
    pub password: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    /// HTTP server port
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database: DatabaseConfig {
                host: env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("DATABASE_PORT")
                    .unwrap_or_else(|_| "5432".to_string())
                    .parse()
                    .context("DATABASE_PORT must be a valid port number")?,
                name: env::var("DATABASE_NAME").unwrap_or_else(|_| "pokemondb".to_string()),
                user: env::var("DATABASE_USER").unwrap_or_else(|_| "postgres".to_string()),
                password: env::var("DATABASE_PASSWORD").unwrap_or_default(),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
            },
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
        })
    }
}
