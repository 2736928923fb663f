//! Service error types
//!
//! Every handler returns `Result<T, AppError>`; the `IntoResponse` impl maps
//! each variant to a status code and a JSON `{error, code}` body. All errors
//! are terminal for the current action; nothing here retries.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

use crate::answer::GenerationError;
use crate::pdf::ExtractError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Uploaded file exceeds the size limit; rejected before any parsing
    #[error("File size {size} exceeds the {max} byte limit")]
    FileTooLarge { size: usize, max: usize },

    /// Uploaded file is not a .pdf
    #[error("Unsupported file type: {0}")]
    InvalidFileType(String),

    /// Multipart upload did not contain a file part
    #[error("Upload did not contain a file")]
    MissingFile,

    /// Malformed multipart request body
    #[error("Malformed upload request: {0}")]
    Multipart(String),

    /// The PDF could not be parsed
    #[error(transparent)]
    Extraction(#[from] ExtractError),

    /// Ask was submitted with an empty query
    #[error("Query must not be empty")]
    EmptyQuery,

    /// No session for the given document id
    #[error("Document not found: {0}")]
    SessionNotFound(String),

    /// No answer has been stored for the session yet
    #[error("No answer yet for document: {0}")]
    AnswerNotFound(String),

    /// The generation request failed before producing a usable answer
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MissingFile | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::EmptyQuery => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SessionNotFound(_) | AppError::AnswerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::FileTooLarge { .. } => "FILE_TOO_LARGE",
            AppError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            AppError::MissingFile => "MISSING_FILE",
            AppError::Multipart(_) => "MALFORMED_UPLOAD",
            AppError::Extraction(_) => "EXTRACTION_FAILED",
            AppError::EmptyQuery => "EMPTY_QUERY",
            AppError::SessionNotFound(_) => "SESSION_NOT_FOUND",
            AppError::AnswerNotFound(_) => "ANSWER_NOT_FOUND",
            AppError::Generation(_) => "UPSTREAM_UNREACHABLE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
            code: self.code(),
        });
        (status, body).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
