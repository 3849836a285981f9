#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Record types extracted from swim-meet start-list PDFs.
//!
//! This crate defines the canonical shapes shared by the parser, the
//! search layer, and the REST API. The field names mirror the German meet
//! program vocabulary: a *section* (Abschnitt) groups *events*
//! (Wettkampf), an event runs in *heats* (Lauf), and each heat assigns
//! swimmers to *lanes* (Bahn).

use serde::{Deserialize, Serialize};

/// A dated top-level grouping of events in a meet program (Abschnitt).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section number as printed in the program.
    pub number: String,
    /// Free-text date trailing the section header.
    pub date: String,
}

/// A single race/discipline within a section (Wettkampf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event number as printed in the program.
    pub number: String,
    /// Event title (e.g. "50m Freistil").
    pub title: String,
}

/// One timed group of lanes within an event (Lauf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heat {
    /// Heat number within the event.
    pub heat_number: String,
    /// Total number of heats in the event.
    pub heat_total: String,
}

/// One swimmer's lane assignment and seed time within a heat.
///
/// Immutable once built. The section/event/heat context is copied into
/// the entry at emission time, so a later header line in the document can
/// never retroactively alter an already-built entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceEntry {
    /// Section active when the entry was parsed, if any.
    pub section: Option<Section>,
    /// Event active when the entry was parsed.
    pub event: Option<Event>,
    /// Heat active when the entry was parsed.
    pub heat: Option<Heat>,
    /// Lane number.
    pub lane: String,
    /// Swimmer surname.
    pub last_name: String,
    /// Swimmer given name.
    pub first_name: String,
    /// Four-digit birth year.
    pub birth_year: String,
    /// Club name.
    pub club: String,
    /// Pre-registered seed time (Meldezeit), e.g. "00:28,10".
    pub entry_time: String,
}

/// Labeled schedule times from the document header, one per document.
///
/// Each field holds the first matching time string found in the text, or
/// an empty string if the label never appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Gate/admission time (Einlass).
    pub gate_time: String,
    /// Warm-up time (Einschwimmen).
    pub warmup_time: String,
    /// Officials meeting time (Kampfrichtersitzung).
    pub officials_time: String,
    /// Start of the session (Beginn).
    pub start_time: String,
}
