use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Failures of the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("stored JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} not found")]
    NotFound(&'static str),
}

/// Failures of the flat-file store.
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("file store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file store JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid identifier {0:?}")]
    InvalidId(String),
}

/// Errors surfaced by HTTP handlers. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    FileStore(FileStoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => ServiceError::NotFound(format!("{} not found", what)),
            other => ServiceError::Store(other),
        }
    }
}

impl From<FileStoreError> for ServiceError {
    fn from(err: FileStoreError) -> Self {
        match err {
            FileStoreError::InvalidId(_) => ServiceError::BadRequest(err.to_string()),
            other => ServiceError::FileStore(other),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) | ServiceError::FileStore(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(json!({ "detail": self.to_string() }))
    }
}
