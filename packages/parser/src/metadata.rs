//! Schedule-time extraction from the document header.
//!
//! Independent of the structural scan in [`crate::scan`]: all four
//! patterns are tried against every line (no priority order, no line
//! consumption), and the first match per label wins. Start lists repeat
//! the header block on every page, so anything after the first match is
//! a duplicate and ignored.
//!
//! Unlike the structural keywords, the labels are matched
//! case-insensitively — header typography varies between exports while
//! the structural keywords do not.

use std::sync::LazyLock;

use regex::Regex;
use startlist_entry_models::DocumentMeta;

use crate::normalize_line;

/// `Einlass[:] HH:MM [Uhr]` — gate/admission time.
static GATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Einlass\s*:?\s*(\d{2}:\d{2}(?:\s*Uhr)?)").expect("valid regex")
});

/// `Einschwimmen[:] HH:MM [Uhr]` — warm-up time.
static WARMUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Einschwimmen\s*:?\s*(\d{2}:\d{2}(?:\s*Uhr)?)").expect("valid regex")
});

/// `Kampfrichtersitzung[:] HH:MM [Uhr]` — officials meeting time.
static OFFICIALS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Kampfrichtersitzung\s*:?\s*(\d{2}:\d{2}(?:\s*Uhr)?)").expect("valid regex")
});

/// `Beginn[:] HH:MM [Uhr]` — session start time.
static START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Beginn\s*:?\s*(\d{2}:\d{2}(?:\s*Uhr)?)").expect("valid regex")
});

/// Extracts the four labeled schedule times from start-list text.
///
/// Total over any input: a label that never matches leaves its field as
/// the empty string. Once a field is set it is never overwritten by a
/// later duplicate label.
#[must_use]
pub fn extract_metadata(text: &str) -> DocumentMeta {
    let mut meta = DocumentMeta::default();

    for raw_line in text.lines() {
        let line = normalize_line(raw_line);
        if line.is_empty() {
            continue;
        }

        capture_first(&GATE_RE, &line, &mut meta.gate_time);
        capture_first(&WARMUP_RE, &line, &mut meta.warmup_time);
        capture_first(&OFFICIALS_RE, &line, &mut meta.officials_time);
        capture_first(&START_RE, &line, &mut meta.start_time);
    }

    meta
}

/// Stores the captured time into `slot` unless a previous line already
/// filled it (first match wins).
fn capture_first(pattern: &Regex, line: &str, slot: &mut String) {
    if !slot.is_empty() {
        return;
    }
    if let Some(caps) = pattern.captures(line) {
        *slot = caps[1].trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_four_fields() {
        let text = "Einlass: 17:30 Uhr\n\
                    Einschwimmen: 17:45 Uhr\n\
                    Kampfrichtersitzung: 18:00 Uhr\n\
                    Beginn: 18:30 Uhr";
        let meta = extract_metadata(text);
        assert_eq!(meta.gate_time, "17:30 Uhr");
        assert_eq!(meta.warmup_time, "17:45 Uhr");
        assert_eq!(meta.officials_time, "18:00 Uhr");
        assert_eq!(meta.start_time, "18:30 Uhr");
    }

    #[test]
    fn first_match_per_field_wins() {
        let text = "Einlass: 17:30 Uhr\nEinlass 18:00";
        let meta = extract_metadata(text);
        assert_eq!(meta.gate_time, "17:30 Uhr");
    }

    #[test]
    fn uhr_suffix_is_optional() {
        let meta = extract_metadata("Beginn 09:00");
        assert_eq!(meta.start_time, "09:00");
    }

    #[test]
    fn colon_after_label_is_optional() {
        let meta = extract_metadata("Einschwimmen 08:15 Uhr");
        assert_eq!(meta.warmup_time, "08:15 Uhr");
    }

    #[test]
    fn labels_match_case_insensitively() {
        let meta = extract_metadata("EINLASS: 17:30 Uhr");
        assert_eq!(meta.gate_time, "17:30 Uhr");
    }

    #[test]
    fn unmatched_fields_stay_empty() {
        let meta = extract_metadata("Wettkampf 3 - 50m Freistil");
        assert_eq!(meta, DocumentMeta::default());
    }

    #[test]
    fn fields_on_one_line_are_all_captured() {
        let text = "Einlass 17:30 Uhr  Beginn 18:30 Uhr";
        let meta = extract_metadata(text);
        assert_eq!(meta.gate_time, "17:30 Uhr");
        assert_eq!(meta.start_time, "18:30 Uhr");
    }
}
