//! In-memory document store and uploaded-file housekeeping.
//!
//! Documents live for the lifetime of the process (no persistence across
//! restarts). Writes take the write lock; queries take the read lock.
//! Parsing happens before insertion, outside the lock, so a parse of one
//! document never observes another document's state.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::RwLock;

use startlist_entry_models::{DocumentMeta, RaceEntry};
use uuid::Uuid;

/// One uploaded start list with its extracted text and parse results.
#[derive(Debug)]
pub struct StoredDocument {
    /// Server-assigned document id.
    pub id: Uuid,
    /// Filename the uploaded PDF is stored under.
    pub filename: String,
    /// Flattened text layer of the PDF.
    pub text: String,
    /// Schedule times from the document header.
    pub meta: DocumentMeta,
    /// Parsed race entries, in source line order.
    pub entries: Vec<RaceEntry>,
}

/// Process-wide list of uploaded documents behind a read-write lock.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: RwLock<Vec<StoredDocument>>,
}

impl DocumentStore {
    /// Adds a document to the store.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn insert(&self, document: StoredDocument) {
        self.documents
            .write()
            .expect("document store lock poisoned")
            .push(document);
    }

    /// Runs `f` over the full document list under the read lock.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn with_documents<R>(&self, f: impl FnOnce(&[StoredDocument]) -> R) -> R {
        let documents = self.documents.read().expect("document store lock poisoned");
        f(&documents)
    }

    /// Runs `f` on the document with the given id, if it exists.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn with_document<R>(&self, id: Uuid, f: impl FnOnce(&StoredDocument) -> R) -> Option<R> {
        let documents = self.documents.read().expect("document store lock poisoned");
        documents.iter().find(|doc| doc.id == id).map(f)
    }

    /// Removes and returns the document with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    pub fn remove(&self, id: Uuid) -> Option<StoredDocument> {
        let mut documents = self
            .documents
            .write()
            .expect("document store lock poisoned");
        let index = documents.iter().position(|doc| doc.id == id)?;
        Some(documents.remove(index))
    }

    /// Filenames currently registered to a stored document.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn registered_filenames(&self) -> BTreeSet<String> {
        let documents = self.documents.read().expect("document store lock poisoned");
        documents.iter().map(|doc| doc.filename.clone()).collect()
    }
}

/// Removes files in the upload directory not registered to any document.
///
/// Runs at startup (where everything on disk is an orphan, since the
/// store is not persistent) and after each delete. Individual removal
/// failures are logged and skipped, never fatal.
pub fn cleanup_orphan_files(upload_dir: &Path, registered: &BTreeSet<String>) {
    let entries = match std::fs::read_dir(upload_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "Failed to list upload directory {}: {e}",
                upload_dir.display()
            );
            return;
        }
    };

    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if registered.contains(&name) {
            continue;
        }

        let path = entry.path();
        match std::fs::remove_file(&path) {
            Ok(()) => log::info!("Removed orphan upload {}", path.display()),
            Err(e) => log::warn!("Failed to remove orphan upload {}: {e}", path.display()),
        }
    }
}
