use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// The error kinds handlers surface to callers. NotFound and Conflict carry
// the book id and map to their own status codes; everything else is a
// storage or internal failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Book with id: {0} was not found")]
    NotFound(i64),
    #[error("Book with id: {0} already exists")]
    Conflict(i64),
    #[error(transparent)]
    Database(sqlx::Error),
    #[error(transparent)]
    Internal(anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()).into_response(),
            AppError::Database(err) => {
                tracing::error!("Storage error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something went wrong: {}", err),
                )
                    .into_response()
            }
            AppError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Something went wrong: {}", err),
                )
                    .into_response()
            }
        }
    }
}

// SQLite reports a duplicate primary key with extended result code 1555
// (SQLITE_CONSTRAINT_PRIMARYKEY) or 2067 (SQLITE_CONSTRAINT_UNIQUE).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => matches!(db.code().as_deref(), Some("1555") | Some("2067")),
        _ => false,
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Internal(err.into())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        Self::Internal(err.into())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.into())
    }
}
