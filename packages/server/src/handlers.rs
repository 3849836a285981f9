//! HTTP handler functions for the startlist API.

use std::path::Path;

use actix_web::{HttpResponse, web};
use startlist_parser::{extract_metadata, parse_document_text};
use startlist_search::{AutocompleteField, SearchFilter};
use startlist_server_models::{
    ApiDocumentSummary, ApiHealth, AutocompleteQueryParams, SearchQueryParams, SearchResponse,
    UploadQueryParams,
};
use uuid::Uuid;

use crate::AppState;
use crate::store::{self, StoredDocument};

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/documents?filename=<name>`
///
/// Body is the raw PDF bytes. Extracts the text layer, parses metadata
/// and race entries, stores the file and the document. A PDF that cannot
/// be read fails the whole upload — no partially parsed document is ever
/// stored.
pub async fn upload_document(
    state: web::Data<AppState>,
    params: web::Query<UploadQueryParams>,
    body: web::Bytes,
) -> HttpResponse {
    let Some(filename) = sanitize_filename(&params.filename) else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid filename"
        }));
    };

    let text = match startlist_pdf::extract_text(&body) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to read uploaded PDF '{filename}': {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to read PDF"
            }));
        }
    };

    let meta = extract_metadata(&text);
    let entries = parse_document_text(&text);

    let save_path = state.upload_dir.join(&filename);
    if let Err(e) = std::fs::write(&save_path, &body) {
        log::error!("Failed to store upload at {}: {e}", save_path.display());
        return HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to store PDF"
        }));
    }

    let document = StoredDocument {
        id: Uuid::new_v4(),
        filename,
        text,
        meta,
        entries,
    };
    let summary = ApiDocumentSummary {
        id: document.id.to_string(),
        filename: document.filename.clone(),
        entry_count: document.entries.len(),
    };

    log::info!(
        "Uploaded {} as {} ({} entries)",
        summary.filename,
        summary.id,
        summary.entry_count,
    );

    state.store.insert(document);

    HttpResponse::Ok().json(summary)
}

/// `GET /api/documents`
pub async fn list_documents(state: web::Data<AppState>) -> HttpResponse {
    let summaries = state.store.with_documents(|documents| {
        documents
            .iter()
            .map(|doc| ApiDocumentSummary {
                id: doc.id.to_string(),
                filename: doc.filename.clone(),
                entry_count: doc.entries.len(),
            })
            .collect::<Vec<_>>()
    });

    HttpResponse::Ok().json(summaries)
}

/// `DELETE /api/documents/{id}`
///
/// Removes the document, its stored file, and any orphaned files left in
/// the upload directory.
pub async fn delete_document(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return not_found();
    };
    let Some(document) = state.store.remove(id) else {
        return not_found();
    };

    let file_path = state.upload_dir.join(&document.filename);
    if let Err(e) = std::fs::remove_file(&file_path) {
        log::warn!("Failed to remove {}: {e}", file_path.display());
    }
    store::cleanup_orphan_files(&state.upload_dir, &state.store.registered_filenames());

    log::info!("Deleted document {id} ({})", document.filename);

    HttpResponse::Ok().json(serde_json::json!({ "deleted": true }))
}

/// `GET /api/documents/{id}/search`
///
/// Filters the document's entries by the active query fields and returns
/// them sorted, together with the document metadata.
pub async fn search(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<SearchQueryParams>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return not_found();
    };

    let filter = SearchFilter {
        first_name: params.first_name.clone().unwrap_or_default(),
        last_name: params.last_name.clone().unwrap_or_default(),
        club: params.club.clone().unwrap_or_default(),
    };

    let response = state.store.with_document(id, |doc| SearchResponse {
        results: startlist_search::search(&doc.entries, &filter),
        meta: doc.meta.clone(),
    });

    match response {
        Some(response) => HttpResponse::Ok().json(response),
        None => not_found(),
    }
}

/// `GET /api/documents/{id}/autocomplete`
///
/// Returns the distinct values of one name-like field, sorted and
/// deduplicated. An unknown field name is a caller error (400).
pub async fn autocomplete(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<AutocompleteQueryParams>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path) else {
        return not_found();
    };

    let field = match params.field.parse::<AutocompleteField>() {
        Ok(field) => field,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }));
        }
    };

    let query = params.q.clone().unwrap_or_default();
    let values = state
        .store
        .with_document(id, |doc| {
            startlist_search::autocomplete(&doc.entries, field, &query)
        });

    match values {
        Some(values) => HttpResponse::Ok().json(values),
        None => not_found(),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "Document not found"
    }))
}

/// Reduces a client-supplied filename to its final path component.
///
/// Returns `None` for names with no usable component (empty, `..`, or
/// ending in a separator), so uploads can never escape the upload
/// directory.
fn sanitize_filename(raw: &str) -> Option<String> {
    let name = Path::new(raw.trim()).file_name()?.to_str()?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
