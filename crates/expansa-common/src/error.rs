use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpansaError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Indication not found: {0}")]
    IndicationNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExpansaError>;

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// 404
    #[error("Not found: {0}")]
    NotFound(String),
    /// 500
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_)   => StatusCode::NOT_FOUND,
            ApiError::Internal(_)   => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "ERR_BAD_REQUEST",
            ApiError::NotFound(_)   => "ERR_NOT_FOUND",
            ApiError::Internal(_)   => "ERR_INTERNAL",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

impl From<ExpansaError> for ApiError {
    fn from(err: ExpansaError) -> Self {
        match err {
            ExpansaError::InvalidSelection(msg)   => ApiError::BadRequest(msg),
            ExpansaError::IndicationNotFound(name) => ApiError::NotFound(format!("No indication named '{name}'")),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{self}");
        } else {
            tracing::debug!("{self}");
        }
        let body = json!({
            "error": self.code(),
            "message": self.message(),
        });
        (status, Json(body)).into_response()
    }
}
