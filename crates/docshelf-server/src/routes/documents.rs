//! Document routes — upload, list, delete.

use std::io::Write;
use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::info;

use docshelf_core::{DocumentRecord, Error};
use docshelf_extract::MediaType;

use super::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/upload", post(upload_document))
        .route("/documents", get(list_documents))
        .route("/delete/{id}", delete(delete_document))
}

/// POST /upload — ingest a single PDF or DOCX file (multipart).
///
/// The record is appended to the catalog only after extraction and
/// annotation both complete; no partial record is ever stored.
async fn upload_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<DocumentRecord>, ApiError> {
    // Take the first field carrying a file.
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.file_name().is_some() => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return Err(Error::Internal("no file field in upload request".into()).into())
            }
            Err(e) => return Err(Error::Internal(format!("multipart read failed: {}", e)).into()),
        }
    };

    // Validate the declared media type before reading the body.
    let content_type = field.content_type().unwrap_or("").to_string();
    let media_type = MediaType::from_content_type(&content_type)
        .ok_or_else(|| Error::UnsupportedMediaType(content_type.clone()))?;

    let title = field.file_name().unwrap_or("unnamed").to_string();

    let bytes = field
        .bytes()
        .await
        .map_err(|e| Error::Internal(format!("failed to read upload body: {}", e)))?;
    if bytes.is_empty() {
        return Err(Error::EmptyFile.into());
    }

    // Spool to a transient file and extract off the async runtime. The temp
    // file is removed on drop whether or not extraction succeeds.
    let text = tokio::task::spawn_blocking(move || -> docshelf_core::Result<String> {
        let mut spool = tempfile::NamedTempFile::new()?;
        spool.write_all(&bytes)?;
        docshelf_extract::extract_file(spool.path(), media_type)
    })
    .await
    .map_err(|e| Error::Internal(format!("extraction task failed: {}", e)))??;

    if text.is_empty() {
        return Err(Error::NoContent.into());
    }

    // Category and summary are independent; run them concurrently. Failures
    // degrade to fallback strings inside the annotator and never fail the
    // upload.
    let (category, summary) = tokio::join!(
        state.annotator.categorize(&text),
        state.annotator.summarize(&text),
    );

    let record = DocumentRecord::new(title, category, summary);
    state.catalog.append(record.clone());

    info!(
        "ingested {:?} as {} (category {:?})",
        record.title, record.id, record.category
    );

    Ok(Json(record))
}

/// GET /documents — all records, insertion order.
async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<DocumentRecord>> {
    Json(state.catalog.list())
}

/// DELETE /delete/:id — remove a record. Succeeds whether or not the id
/// existed.
async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Json<serde_json::Value> {
    state.catalog.remove_by_id(&id);
    Json(serde_json::json!({ "message": "Document deleted successfully" }))
}
