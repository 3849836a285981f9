#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Search and autocomplete over parsed race entries.
//!
//! Both operations work on the in-memory entry list of a single
//! document. [`search`] filters by case-insensitive substring
//! containment on given name, surname, and club, and sorts by a fixed
//! composite key. [`autocomplete`] collects the distinct values of one
//! name-like field for typeahead suggestions.

use std::collections::BTreeSet;
use std::str::FromStr;

use startlist_entry_models::RaceEntry;

/// Filter strings for a search request.
///
/// A field participates only if it is non-empty after trimming; active
/// fields are combined with logical AND.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Substring to match against the given name.
    pub first_name: String,
    /// Substring to match against the surname.
    pub last_name: String,
    /// Substring to match against the club.
    pub club: String,
}

/// Filters entries by the active fields and sorts the matches.
///
/// Matching is case-insensitive substring containment per field. The
/// sort key is club → surname → given name (each case-insensitive),
/// then section date → section number → event number, using the empty
/// string when the context field is absent.
#[must_use]
pub fn search(entries: &[RaceEntry], filter: &SearchFilter) -> Vec<RaceEntry> {
    let first_name = filter.first_name.trim().to_lowercase();
    let last_name = filter.last_name.trim().to_lowercase();
    let club = filter.club.trim().to_lowercase();

    let mut results: Vec<RaceEntry> = entries
        .iter()
        .filter(|entry| {
            (first_name.is_empty() || entry.first_name.to_lowercase().contains(&first_name))
                && (last_name.is_empty() || entry.last_name.to_lowercase().contains(&last_name))
                && (club.is_empty() || entry.club.to_lowercase().contains(&club))
        })
        .cloned()
        .collect();

    results.sort_by_key(sort_key);

    results
}

/// Composite sort key for search results.
fn sort_key(entry: &RaceEntry) -> (String, String, String, String, String, String) {
    (
        entry.club.to_lowercase(),
        entry.last_name.to_lowercase(),
        entry.first_name.to_lowercase(),
        entry
            .section
            .as_ref()
            .map(|section| section.date.clone())
            .unwrap_or_default(),
        entry
            .section
            .as_ref()
            .map(|section| section.number.clone())
            .unwrap_or_default(),
        entry
            .event
            .as_ref()
            .map(|event| event.number.clone())
            .unwrap_or_default(),
    )
}

/// The entry fields autocomplete can suggest values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutocompleteField {
    /// Given names.
    FirstName,
    /// Surnames.
    LastName,
    /// Club names.
    Club,
}

/// Error returned when an autocomplete request names an unknown field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid autocomplete field '{field}': expected firstName, lastName, or club")]
pub struct InvalidFieldError {
    /// The field name that was requested.
    pub field: String,
}

impl FromStr for AutocompleteField {
    type Err = InvalidFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "club" => Ok(Self::Club),
            _ => Err(InvalidFieldError {
                field: s.to_string(),
            }),
        }
    }
}

/// Collects the distinct values of `field` across all entries.
///
/// A non-empty `query` (after trimming) keeps only values containing it
/// case-insensitively. The result is deduplicated and sorted in
/// case-sensitive lexicographic order.
#[must_use]
pub fn autocomplete(entries: &[RaceEntry], field: AutocompleteField, query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();

    let mut values = BTreeSet::new();
    for entry in entries {
        let value = match field {
            AutocompleteField::FirstName => &entry.first_name,
            AutocompleteField::LastName => &entry.last_name,
            AutocompleteField::Club => &entry.club,
        };

        if value.is_empty() {
            continue;
        }
        if !query.is_empty() && !value.to_lowercase().contains(&query) {
            continue;
        }

        values.insert(value.clone());
    }

    values.into_iter().collect()
}
