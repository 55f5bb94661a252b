/// What can go wrong while bringing the database up.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SeaORM-level errors (queries, pool, protocol)
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after exhausting retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration run failed
    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
