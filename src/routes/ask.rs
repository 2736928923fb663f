//! Answer request endpoints
//!
//! - `POST /api/v1/documents/:id/ask` - submit a query, store the answer
//! - `GET  /api/v1/documents/:id/answer` - most recent answer for the session
//!
//! The ask handler is pure orchestration: guard the query, call the
//! generation provider, store the outcome. A non-success upstream status is
//! not an error at this level; its formatted form becomes the answer text
//! the user sees. The stored answer is only replaced once the outcome is
//! known, so a pending ask never exposes a stale answer under a new query.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::answer::GenerationError;
use crate::error::{AppError, Result};
use crate::session::Answer;
use crate::state::AppState;

/// Create the ask router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:id/ask", post(ask))
        .route("/:id/answer", get(get_answer))
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub document_id: Uuid,
    pub answer: Answer,
}

/// POST /api/v1/documents/:id/ask
async fn ask(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AnswerResponse>> {
    let query = request.query.trim().to_string();
    if query.is_empty() {
        return Err(AppError::EmptyQuery);
    }

    // Confirm the session exists before spending an upstream call
    if state.sessions().get(id).await.is_none() {
        return Err(AppError::SessionNotFound(id.to_string()));
    }

    let text = match state.provider().generate(&query).await {
        Ok(text) => text,
        // Non-success statuses surface verbatim as the displayed answer
        Err(err @ GenerationError::Api { .. }) => err.to_string(),
        Err(err) => return Err(err.into()),
    };

    let answer = Answer {
        query,
        text,
        created_at: Utc::now(),
    };
    if !state.sessions().set_answer(id, answer.clone()).await {
        // Session was discarded while the upstream call was in flight
        return Err(AppError::SessionNotFound(id.to_string()));
    }

    tracing::info!(document_id = %id, query = %answer.query, "Answer stored");

    Ok(Json(AnswerResponse {
        document_id: id,
        answer,
    }))
}

/// GET /api/v1/documents/:id/answer
async fn get_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnswerResponse>> {
    let session = state
        .sessions()
        .get(id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;

    let answer = session
        .last_answer
        .ok_or_else(|| AppError::AnswerNotFound(id.to_string()))?;

    Ok(Json(AnswerResponse {
        document_id: id,
        answer,
    }))
}
