#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the startlist search application.
//!
//! Accepts swim-meet start-list PDFs, extracts their text layer, parses
//! race entries and header metadata once at upload, and serves
//! search/autocomplete queries over the parsed records. Documents are
//! held in memory only; uploaded files are kept on disk and cleaned up
//! when their document is deleted (or orphaned at startup).

mod handlers;
pub mod store;

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, Scope, middleware, web};

use crate::store::DocumentStore;

/// Upload size cap for the raw-PDF request body.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Shared application state.
pub struct AppState {
    /// In-memory document store.
    pub store: DocumentStore,
    /// Directory uploaded PDFs are stored in.
    pub upload_dir: PathBuf,
}

/// Builds the `/api` route tree. Shared between the server and the
/// handler tests.
#[must_use]
pub fn api_scope() -> Scope {
    web::scope("/api")
        .route("/health", web::get().to(handlers::health))
        .route("/documents", web::post().to(handlers::upload_document))
        .route("/documents", web::get().to(handlers::list_documents))
        .route("/documents/{id}", web::delete().to(handlers::delete_document))
        .route("/documents/{id}/search", web::get().to(handlers::search))
        .route(
            "/documents/{id}/autocomplete",
            web::get().to(handlers::autocomplete),
        )
}

/// Starts the startlist API server.
///
/// Creates the upload directory, sweeps orphaned uploads from previous
/// runs (the store is in-memory, so everything on disk is an orphan at
/// startup), and starts the Actix-Web HTTP server. This is a regular
/// async function — the caller provides the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the upload directory cannot be
/// created or the HTTP server fails to bind or encounters a runtime
/// error.
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let upload_dir = PathBuf::from(
        std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "data/uploads".to_string()),
    );
    std::fs::create_dir_all(&upload_dir)?;

    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

    let store = DocumentStore::default();
    store::cleanup_orphan_files(&upload_dir, &store.registered_filenames());

    let state = web::Data::new(AppState { store, upload_dir });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .service(api_scope())
            // Serve frontend static files
            .service(Files::new("/", static_dir.as_str()).index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
