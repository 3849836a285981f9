#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Line-oriented parser for swim-meet start-list text.
//!
//! Meet-management software exports start lists as PDFs whose text layer
//! is line-structured: section headers (`Abschnitt 1 - 12.05.2024`),
//! event headers (`Wettkampf 3 - 50m Freistil`), heat headers
//! (`Lauf 2/5`), and lane entries
//! (`Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10`).
//!
//! Two independent passes over the same flattened text:
//!
//! - [`parse_document_text`] walks the lines once, carrying the current
//!   section/event/heat context forward, and emits one [`RaceEntry`] per
//!   recognized lane line (see [`scan`]).
//! - [`extract_metadata`] scans all lines for the four labeled schedule
//!   times, first match per label wins (see [`metadata`]).
//!
//! Both functions are total: unmatched lines are skipped, never an error.
//! Exports are not schema-guaranteed, so the parser degrades by omission.
//!
//! [`RaceEntry`]: startlist_entry_models::RaceEntry

pub mod metadata;
pub mod scan;

pub use metadata::extract_metadata;
pub use scan::parse_document_text;

/// Collapses runs of whitespace to single spaces and trims the ends.
///
/// Applied to every line before pattern matching, in both passes. PDF
/// text layers pad columns with arbitrary whitespace, so the patterns
/// only ever see single-space-separated tokens.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<&str>>().join(" ")
}
