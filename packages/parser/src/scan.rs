//! Line classifier, context tracker, and record builder.
//!
//! A single forward pass over the document lines. Each line is matched
//! against the four structural patterns in fixed priority order — section
//! header, event header, heat header, lane entry — and the first match
//! consumes the line. Header matches replace the corresponding context
//! field wholesale; lane-entry matches combine the captures with the
//! current context to build one [`RaceEntry`].
//!
//! The structural keywords are matched case-sensitively: the export
//! format capitalizes them reliably, and loosening this would let
//! narrative text (e.g. "im lauf des Tages") shadow real headers.

use std::sync::LazyLock;

use regex::Regex;
use startlist_entry_models::{Event, Heat, RaceEntry, Section};

use crate::normalize_line;

/// `Abschnitt <number> - <date>` — the date is free text to end of line.
static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Abschnitt\s+(\d+)\s*-\s*(.+)").expect("valid regex"));

/// `Wettkampf <number> - <title>` — the title is free text to end of line.
static EVENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Wettkampf\s+(\d+)\s*-\s*(.+)").expect("valid regex"));

/// `Lauf <current>/<total>`.
static HEAT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Lauf\s+(\d+)/(\d+)").expect("valid regex"));

/// `Bahn <lane> <surname>, <given name> <birth year> <club> <time>`.
///
/// The name class covers the German extended alphabet plus spaces and
/// hyphens. Digits and apostrophes are deliberately excluded — names
/// containing them fail the match and the line is skipped, a known gap
/// of the export format. The club capture is non-greedy so it stops
/// before the time; the time accepts either comma or period before the
/// fractional seconds.
static LANE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Bahn\s+(\d+)\s+([A-Za-zÄÖÜäöüß\- ]+),\s*([A-Za-zÄÖÜäöüß\- ]+)\s+(\d{4})\s+(.+?)\s+(\d{2}:\d{2}[,.]\d{2})",
    )
    .expect("valid regex")
});

/// Running parse state, local to one [`parse_document_text`] call.
///
/// Each field persists until the next header of its kind overwrites it.
/// A section change resets nothing else — sections are metadata only and
/// do not gate entry emission.
#[derive(Debug, Default)]
struct ScanContext {
    section: Option<Section>,
    event: Option<Event>,
    heat: Option<Heat>,
}

/// Parses start-list text into race entries, in source line order.
///
/// Total over any input: lines matching none of the four patterns are
/// silently skipped, and lane entries seen before any event and heat
/// header are dropped. Patterns match anywhere within the normalized
/// line, so page furniture around a header does not hide it.
#[must_use]
pub fn parse_document_text(text: &str) -> Vec<RaceEntry> {
    let mut context = ScanContext::default();
    let mut entries = Vec::new();

    for raw_line in text.lines() {
        let line = normalize_line(raw_line);
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = SECTION_RE.captures(&line) {
            context.section = Some(Section {
                number: caps[1].to_string(),
                date: caps[2].to_string(),
            });
            continue;
        }

        if let Some(caps) = EVENT_RE.captures(&line) {
            context.event = Some(Event {
                number: caps[1].to_string(),
                title: caps[2].to_string(),
            });
            continue;
        }

        if let Some(caps) = HEAT_RE.captures(&line) {
            context.heat = Some(Heat {
                heat_number: caps[1].to_string(),
                heat_total: caps[2].to_string(),
            });
            continue;
        }

        if let Some(caps) = LANE_RE.captures(&line) {
            // An entry only makes sense under an event and a heat; the
            // section may legitimately be absent.
            let (Some(event), Some(heat)) = (context.event.as_ref(), context.heat.as_ref()) else {
                continue;
            };

            entries.push(RaceEntry {
                section: context.section.clone(),
                event: Some(event.clone()),
                heat: Some(heat.clone()),
                lane: caps[1].to_string(),
                last_name: caps[2].trim().to_string(),
                first_name: caps[3].trim().to_string(),
                birth_year: caps[4].to_string(),
                club: caps[5].trim().to_string(),
                entry_time: caps[6].to_string(),
            });
        }
    }

    log::debug!("Parsed {} race entries from document text", entries.len());

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Abschnitt 1 - 12.05.2024\n\
                           Wettkampf 3 - 50m Freistil\n\
                           Lauf 2/5\n\
                           Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";

    #[test]
    fn parses_the_worked_example() {
        let entries = parse_document_text(EXAMPLE);
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        let section = entry.section.as_ref().unwrap();
        assert_eq!(section.number, "1");
        assert_eq!(section.date, "12.05.2024");

        let event = entry.event.as_ref().unwrap();
        assert_eq!(event.number, "3");
        assert_eq!(event.title, "50m Freistil");

        let heat = entry.heat.as_ref().unwrap();
        assert_eq!(heat.heat_number, "2");
        assert_eq!(heat.heat_total, "5");

        assert_eq!(entry.lane, "4");
        assert_eq!(entry.last_name, "Mueller");
        assert_eq!(entry.first_name, "Jan");
        assert_eq!(entry.birth_year, "2008");
        assert_eq!(entry.club, "SV Beispiel");
        assert_eq!(entry.entry_time, "00:28,10");
    }

    #[test]
    fn unstructured_text_yields_no_entries() {
        let text = "Hallenbad Musterstadt\nProtokoll\nSeite 3 von 12\n";
        assert!(parse_document_text(text).is_empty());
    }

    #[test]
    fn lane_line_before_event_and_heat_is_dropped() {
        let text = "Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        assert!(parse_document_text(text).is_empty());
    }

    #[test]
    fn lane_line_with_event_but_no_heat_is_dropped() {
        let text = "Wettkampf 3 - 50m Freistil\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        assert!(parse_document_text(text).is_empty());
    }

    #[test]
    fn section_is_optional_for_emission() {
        let text = "Wettkampf 3 - 50m Freistil\n\
                    Lauf 2/5\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].section.is_none());
    }

    #[test]
    fn extra_interior_whitespace_yields_identical_records() {
        let padded = "Abschnitt  1   -  12.05.2024\n\
                      Wettkampf\t3  -  50m Freistil\n\
                      Lauf   2/5\n\
                      Bahn   4   Mueller,   Jan   2008   SV Beispiel   00:28,10";
        assert_eq!(parse_document_text(padded), parse_document_text(EXAMPLE));
    }

    #[test]
    fn headers_match_anywhere_in_the_line() {
        let text = "Seite 2 Wettkampf 3 - 50m Freistil\n\
                    --- Lauf 2/5 ---\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        assert_eq!(parse_document_text(text).len(), 1);
    }

    #[test]
    fn event_header_wins_over_heat_text_on_the_same_line() {
        // "Lauf 2/5" inside an event title must not set the heat context.
        let text = "Wettkampf 3 - 50m Freistil Lauf 2/5\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        let entries = parse_document_text(text);
        assert!(entries.is_empty());
    }

    #[test]
    fn new_event_replaces_previous_event_wholesale() {
        let text = "Wettkampf 3 - 50m Freistil\n\
                    Lauf 1/2\n\
                    Wettkampf 4 - 100m Ruecken\n\
                    Bahn 2 Schmidt, Anna 2010 SC Wasser 01:15.40";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 1);

        let event = entries[0].event.as_ref().unwrap();
        assert_eq!(event.number, "4");
        assert_eq!(event.title, "100m Ruecken");
        // The heat from the previous event carries over — event headers
        // do not reset the heat context.
        assert_eq!(entries[0].heat.as_ref().unwrap().heat_number, "1");
        assert_eq!(entries[0].entry_time, "01:15.40");
    }

    #[test]
    fn section_change_does_not_reset_event_or_heat() {
        let text = "Abschnitt 1 - 12.05.2024\n\
                    Wettkampf 3 - 50m Freistil\n\
                    Lauf 2/5\n\
                    Abschnitt 2 - 13.05.2024\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 1);

        let section = entries[0].section.as_ref().unwrap();
        assert_eq!(section.number, "2");
        assert_eq!(section.date, "13.05.2024");
        // The event and heat from before the section change still apply.
        assert_eq!(entries[0].event.as_ref().unwrap().number, "3");
        assert_eq!(entries[0].heat.as_ref().unwrap().heat_number, "2");
    }

    #[test]
    fn later_headers_do_not_alter_earlier_entries() {
        let text = "Wettkampf 3 - 50m Freistil\n\
                    Lauf 1/2\n\
                    Bahn 1 Mueller, Jan 2008 SV Beispiel 00:28,10\n\
                    Lauf 2/2\n\
                    Bahn 5 Schmidt, Anna 2010 SC Wasser 00:31,22";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].heat.as_ref().unwrap().heat_number, "1");
        assert_eq!(entries[1].heat.as_ref().unwrap().heat_number, "2");
    }

    #[test]
    fn entries_keep_source_line_order() {
        let text = "Wettkampf 1 - 50m Brust\n\
                    Lauf 1/1\n\
                    Bahn 3 Weber, Lena 2009 SV Nord 00:42,00\n\
                    Bahn 1 Albrecht, Zoe 2009 SV Sued 00:45,10";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].lane, "3");
        assert_eq!(entries[1].lane, "1");
    }

    #[test]
    fn names_with_umlauts_and_hyphens_match() {
        let text = "Wettkampf 2 - 100m Lagen\n\
                    Lauf 1/3\n\
                    Bahn 6 Müller-Lüdenscheidt, Jörg 2001 SG Südwest 01:02,35";
        let entries = parse_document_text(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].last_name, "Müller-Lüdenscheidt");
        assert_eq!(entries[0].first_name, "Jörg");
        assert_eq!(entries[0].club, "SG Südwest");
    }

    #[test]
    fn lane_line_missing_a_field_is_skipped() {
        // No birth year — the line is not a lane entry and falls through.
        let text = "Wettkampf 3 - 50m Freistil\n\
                    Lauf 2/5\n\
                    Bahn 4 Mueller, Jan SV Beispiel 00:28,10";
        assert!(parse_document_text(text).is_empty());
    }

    #[test]
    fn structural_keywords_are_case_sensitive() {
        let text = "wettkampf 3 - 50m Freistil\n\
                    lauf 2/5\n\
                    Bahn 4 Mueller, Jan 2008 SV Beispiel 00:28,10";
        assert!(parse_document_text(text).is_empty());
    }
}
