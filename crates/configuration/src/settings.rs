use crate::error::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub uploads: UploadSettings,
    pub static_files: StaticSettings,
    pub log: LogSettings,
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Parameters for the PostgreSQL connection pool.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Connection string. Usually supplied through `DATABASE_URL`.
    #[serde(default)]
    pub url: String,
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection.
    pub acquire_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    /// Directory uploaded files are written into. Created on demand.
    pub dir: PathBuf,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticSettings {
    /// Directory served under `/static`.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Settings {
    /// Checks values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be greater than zero".to_string(),
            ));
        }
        if self.uploads.max_body_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "uploads.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerSettings {
    /// Resolves `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::ValidationError(format!("invalid server address: {e}")))
    }
}
