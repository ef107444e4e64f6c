//! Configuration module
//!
//! Application configuration loaded from the environment, including server,
//! database, storage, and authentication settings.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

// Common constants
const DEFAULT_PORT: u16 = 4000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 10;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_url_base: Option<String>, // Public URL prefix when blobs are served through a CDN or proxy
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Upload limits
    pub max_file_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(s) => StorageBackend::from_str(&s)?,
            Err(_) => StorageBackend::Local,
        };

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_CONNECTION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS),
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET must be set for authentication"))?,
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT_URL").ok(),
            s3_url_base: env::var("S3_URL_BASE").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
        };

        Ok(config)
    }
}
