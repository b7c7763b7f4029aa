use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load settings for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Database operation failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Database liveness probe returned no row")]
    ProbeFailed,
}
