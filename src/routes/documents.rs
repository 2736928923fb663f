//! Document upload and page access endpoints
//!
//! - `POST   /api/v1/documents` - upload a PDF, extract its pages
//! - `GET    /api/v1/documents/:id` - session summary
//! - `GET    /api/v1/documents/:id/pages` - pages, filtered and highlighted by `?q=`
//! - `DELETE /api/v1/documents/:id` - discard the session
//!
//! Upload validation happens in order: file extension, then size, then
//! extraction. An oversize file is rejected before any parsing.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::pdf;
use crate::search;
use crate::session::DocumentSession;
use crate::state::AppState;

/// Upload size limit: 5 MB
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Transport-level body cap. Set above the file limit so an oversize file
/// reaches the size check and gets the FILE_TOO_LARGE error instead of a
/// bare 413 from the framework.
const BODY_LIMIT: usize = MAX_FILE_SIZE + 1024 * 1024;

/// Create the documents router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_document))
        .route("/:id", get(get_document))
        .route("/:id", delete(delete_document))
        .route("/:id/pages", get(get_pages))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}

/// Summary of an uploaded document
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: Uuid,
    pub file_name: String,
    pub page_count: usize,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&DocumentSession> for DocumentResponse {
    fn from(session: &DocumentSession) -> Self {
        Self {
            id: session.id,
            file_name: session.file_name.clone(),
            page_count: session.pages.len(),
            uploaded_at: session.uploaded_at,
        }
    }
}

/// Query parameters for page listing
#[derive(Debug, Deserialize)]
pub struct PagesQuery {
    /// Literal substring to filter and highlight by
    pub q: Option<String>,
}

/// One page as returned to clients
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub page_number: u32,
    pub content: String,
}

/// Page listing response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageListResponse {
    pub document_id: Uuid,
    /// The effective query, if one was applied
    pub query: Option<String>,
    pub count: usize,
    pub pages: Vec<PageResponse>,
}

/// POST /api/v1/documents
///
/// Multipart upload of a single PDF. Extracts every page's text once and
/// caches the result for the lifetime of the session.
async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentResponse>)> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Multipart(e.to_string()))?;
        upload = Some((file_name, bytes.to_vec()));
        break;
    }

    let (file_name, bytes) = upload.ok_or(AppError::MissingFile)?;

    if !has_pdf_extension(&file_name) {
        return Err(AppError::InvalidFileType(file_name));
    }
    if bytes.len() > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            size: bytes.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let pages = pdf::extract_pages(&bytes)?;
    let session = state.sessions().create(file_name, pages).await;

    tracing::info!(
        document_id = %session.id,
        file_name = %session.file_name,
        file_size = bytes.len(),
        page_count = session.pages.len(),
        "Document uploaded"
    );

    Ok((StatusCode::CREATED, Json(DocumentResponse::from(&session))))
}

/// GET /api/v1/documents/:id
async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>> {
    let session = load_session(&state, id).await?;
    Ok(Json(DocumentResponse::from(&session)))
}

/// GET /api/v1/documents/:id/pages
///
/// Without `q`: every page, verbatim. With a non-empty `q`: only the pages
/// containing the query, each with matches wrapped in bold markers. The
/// stored page text is never modified; highlighting always renders a copy.
async fn get_pages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PagesQuery>,
) -> Result<Json<PageListResponse>> {
    let session = load_session(&state, id).await?;

    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string);

    let pages: Vec<PageResponse> = match &query {
        Some(q) => session
            .pages
            .matching(q)
            .into_iter()
            .map(|page| PageResponse {
                page_number: page.page_number,
                content: search::highlight(&page.content, q),
            })
            .collect(),
        None => session
            .pages
            .iter()
            .map(|page| PageResponse {
                page_number: page.page_number,
                content: page.content.clone(),
            })
            .collect(),
    };

    Ok(Json(PageListResponse {
        document_id: id,
        query,
        count: pages.len(),
        pages,
    }))
}

/// DELETE /api/v1/documents/:id
async fn delete_document(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    if !state.sessions().remove(id).await {
        return Err(AppError::SessionNotFound(id.to_string()));
    }
    tracing::info!(document_id = %id, "Document session discarded");
    Ok(StatusCode::NO_CONTENT)
}

async fn load_session(state: &AppState, id: Uuid) -> Result<DocumentSession> {
    state
        .sessions()
        .get(id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
}

/// Check the upload's file extension
fn has_pdf_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
