use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    ReferentialIntegrity(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Duplicate(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::ReferentialIntegrity(_) => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Replaces the store's message on a uniqueness violation.
    pub fn on_duplicate(self, message: &str) -> Self {
        match self {
            ApiError::Duplicate(_) => ApiError::Duplicate(message.to_string()),
            other => other,
        }
    }

    /// Replaces the store's message on a foreign key violation.
    pub fn on_reference(self, message: &str) -> Self {
        match self {
            ApiError::ReferentialIntegrity(_) => ApiError::ReferentialIntegrity(message.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation => {
                    return ApiError::Duplicate(db_err.message().to_string());
                }
                ErrorKind::ForeignKeyViolation => {
                    return ApiError::ReferentialIntegrity(db_err.message().to_string());
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    return ApiError::Validation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        ApiError::Database(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

/// Presence check for required text fields.
pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
