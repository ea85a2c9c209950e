use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;

const GENERIC_MESSAGE: &str = "An unexpected error occurred.";

/// Failure at the data-access boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or no pooled connection was available.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] DbErr),
    /// The store was reached but rejected or failed the statement.
    #[error("store query failed: {0}")]
    Query(#[source] DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(err),
            _ => Self::Query(err),
        }
    }
}

/// Error surfaced at the HTTP boundary. Only `message` is sent to the client.
#[derive(Debug)]
pub struct AppError {
    message: String,
    source: anyhow::Error,
}

impl AppError {
    pub fn internal(message: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        Self { message: message.into(), source: source.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.source.fmt(f)
    }
}

impl std::error::Error for AppError {}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(GENERIC_MESSAGE, err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        Self::internal(GENERIC_MESSAGE, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);
        (StatusCode::INTERNAL_SERVER_ERROR, self.message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
