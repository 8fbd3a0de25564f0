use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Configuration(String),
    #[error("Database Error: {0}")]
    DatabaseError(String),
    #[error("Employee {0} is already persisted")]
    AlreadyPersisted(i64),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
