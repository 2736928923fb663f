//! Generation error types

use thiserror::Error;

/// Errors from the text-generation endpoint.
///
/// A non-success HTTP status is not retried; its display form carries the
/// status code and response body verbatim and is shown to the user as the
/// answer text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Non-success status from the generation endpoint
    #[error("Error: {status} - {body}")]
    Api { status: u16, body: String },

    /// The request never produced an HTTP response (connect, DNS, read)
    #[error("Generation request failed: {0}")]
    Transport(String),

    /// A success status with a payload that could not be parsed
    #[error("Unexpected generation response: {0}")]
    InvalidResponse(String),
}
