use anyhow::anyhow;
use dotenvy::dotenv;
use secrecy::Secret;
use service_core::error::AppError;
use std::env;

/// Production endpoint serving the notas collection.
const DEFAULT_NOTAS_API_BASE_URL: &str = "https://iob-smart-webapi.azurewebsites.net";

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub source: NotasSourceConfig,
    pub database: DatabaseConfig,
    pub service_name: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct NotasSourceConfig {
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let host = env::var("TRIBUTOS_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("TRIBUTOS_SERVICE_PORT")
            .unwrap_or_else(|_| "3007".to_string())
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow!("Invalid TRIBUTOS_SERVICE_PORT: {}", e)))?;

        let base_url =
            env::var("NOTAS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_NOTAS_API_BASE_URL.to_string());

        // A missing connection string is not a startup error: it surfaces as a
        // connection-open failure when the batch runs.
        let db_url = env::var("TRIBUTOS_DATABASE_URL").unwrap_or_default();

        Ok(Self {
            server: ServerConfig { host, port },
            source: NotasSourceConfig { base_url },
            database: DatabaseConfig {
                url: Secret::new(db_url),
            },
            service_name: "tributos-service".to_string(),
        })
    }
}
