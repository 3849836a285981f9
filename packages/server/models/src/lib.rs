#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the startlist server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the record types in `startlist_entry_models` so the API
//! contract can evolve independently of the parser output.

use serde::{Deserialize, Serialize};
use startlist_entry_models::{DocumentMeta, RaceEntry};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// An uploaded document as listed by the API.
///
/// Also returned by the upload endpoint as the upload receipt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentSummary {
    /// Server-assigned document id (UUID).
    pub id: String,
    /// Original filename of the uploaded PDF.
    pub filename: String,
    /// Number of race entries parsed out of the document.
    pub entry_count: usize,
}

/// Query parameters for the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadQueryParams {
    /// Filename to store the uploaded PDF under.
    pub filename: String,
}

/// Query parameters for the search endpoint.
///
/// Each field is an independent case-insensitive substring filter;
/// missing or blank fields are inactive.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryParams {
    /// Substring filter on the given name.
    pub first_name: Option<String>,
    /// Substring filter on the surname.
    pub last_name: Option<String>,
    /// Substring filter on the club.
    pub club: Option<String>,
}

/// Response from the search endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matching entries, sorted by club, surname, given name, then
    /// section date/number and event number.
    pub results: Vec<RaceEntry>,
    /// Schedule times extracted from the document header.
    pub meta: DocumentMeta,
}

/// Query parameters for the autocomplete endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteQueryParams {
    /// Field to suggest values for: `firstName`, `lastName`, or `club`.
    pub field: String,
    /// Optional case-insensitive substring filter.
    pub q: Option<String>,
}
