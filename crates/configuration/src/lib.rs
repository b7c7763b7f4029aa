use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

#[cfg(feature = "clap")]
pub mod overrides;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    DatabaseSettings, LogSettings, ServerSettings, Settings, StaticSettings, UploadSettings,
};

/// Prefix for environment variables, e.g. `NOTES__SERVER__PORT=9000`.
const ENV_PREFIX: &str = "NOTES";

/// Loads the application settings.
///
/// Sources, lowest precedence first: built-in defaults, an optional
/// `config.toml` in the working directory, `NOTES__*` environment variables,
/// and finally `DATABASE_URL` (also read from `.env`).
pub fn load_settings() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    load_settings_from(None)
}

/// Same as [`load_settings`], reading the given file instead of `config.toml`.
/// The file must exist when a path is given.
pub fn load_settings_from(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config").required(false),
    };

    let builder = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8090_i64)?
        .set_default("database.url", "")?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("uploads.dir", "uploads")?
        .set_default("uploads.max_body_bytes", 50_i64 * 1024 * 1024)?
        .set_default("static_files.dir", "static")?
        .set_default("log.filter", "info,tower_http=debug,sqlx=warn")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_values_from_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
            [server]
            port = 9100

            [uploads]
            dir = "/tmp/note-uploads"
            "#
        )
        .unwrap();

        let settings = load_settings_from(Some(file.path())).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.uploads.dir, Path::new("/tmp/note-uploads"));
        assert_eq!(settings.database.max_connections, 10);
        assert!(settings.log.directory.is_none());
    }

    #[test]
    fn rejects_zero_pool_size() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[database]\nmax_connections = 0").unwrap();

        let err = load_settings_from(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn socket_addr_from_host_and_port() {
        let server = ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 3000);

        let bad = ServerSettings {
            host: "not a host".to_string(),
            port: 3000,
        };
        assert!(bad.socket_addr().is_err());
    }
}
