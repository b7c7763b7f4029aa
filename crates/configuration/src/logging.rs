use crate::error::ConfigError;
use crate::settings::LogSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Always logs to stdout. When `settings.directory` is set, a second layer
/// writes to a daily rolling file there. The returned guard flushes that file
/// on drop and must be held for the lifetime of the process.
pub fn init_tracing(settings: &LogSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let stdout_layer = fmt::layer().with_target(true);

    match &settings.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "notes-service.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);

            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .try_init()
                .map_err(|e| ConfigError::LoggingError(e.to_string()))?;
            Ok(None)
        }
    }
}
