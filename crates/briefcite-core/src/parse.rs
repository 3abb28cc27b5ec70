//! Citation parsing.
//!
//! Five isolated pattern scans over the raw citation string: the case name
//! and its parties, the reporter cite, the court/year parenthetical, a
//! pinpoint page, and subsequent-history phrases. Each scan fills its
//! fields when it matches and leaves them at their empty defaults when it
//! does not, so parsing never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::citation::CitationComponents;
use crate::reporter::reporter_table;

// The case name: everything before the first comma or digit.
static CASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^,\d]+)").expect("case-name pattern should compile"));

// The versus separator: lowercase "v", optional period, whitespace on both
// sides.
static PARTY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+v\.?\s+").expect("party-split pattern should compile"));

// A parenthetical whose last characters before ")" are a 4-digit year,
// e.g. "(9th Cir. 1999)". Group 1 is the court text, group 2 the year.
static COURT_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^)]*?)(\d{4})\)").expect("court-year pattern should compile")
});

// A comma-led page number sitting directly before a parenthetical or the
// end of the string, which is where a pinpoint cite lands.
static PINPOINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*(\d+)\s*(?:\(|$)").expect("pinpoint pattern should compile"));

// A subsequent-history phrase: a disposition marker after a comma, plus
// everything up to the next parenthetical or the end of the string.
static HISTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i),\s*((?:aff'd|rev'd|cert\.\s*denied)[^(]*)")
        .expect("history pattern should compile")
});

/// Parse a free-text case citation into its components.
///
/// # Algorithm
///
/// Each component group is extracted by its own scan of the full input,
/// independent of the others. A scan that finds nothing leaves its fields
/// empty, so the function is total: malformed input degrades to a partial
/// or all-empty [`CitationComponents`], never an error.
///
/// 1. Case name: the run of text before the first comma or digit, split on
///    the versus separator into the two party names. Both parties stay
///    empty unless the split produces two parts.
/// 2. Reporter cite: every reporter-table pattern is tried in order and the
///    last match wins, which settles base-series/successor overlaps such as
///    "F." inside "F.2d".
/// 3. Court and year: the first parenthetical ending in four digits.
/// 4. Pinpoint: a comma-led page number directly before a parenthetical or
///    the end of the string.
/// 5. Subsequent history: every "aff'd", "rev'd", or "cert. denied" phrase,
///    in reading order.
pub fn parse_citation(text: &str) -> CitationComponents {
    let mut components = CitationComponents::default();

    if let Some((one, two)) = extract_parties(text) {
        components.party_one = one;
        components.party_two = two;
    }
    if let Some((abbreviation, volume, page)) = extract_reporter_cite(text) {
        components.reporter = abbreviation.to_string();
        components.volume = volume;
        components.page = page;
    }
    if let Some((court, year)) = extract_court_year(text) {
        components.court = court;
        components.year = year;
    }
    if let Some(pinpoint) = extract_pinpoint(text) {
        components.pinpoint = pinpoint;
    }
    components.subsequent_history = extract_history(text);

    components
}

/// The leading case-name segment split into its two parties, or `None`
/// when the segment has no versus separator.
fn extract_parties(text: &str) -> Option<(String, String)> {
    let caps = CASE_NAME.captures(text)?;
    let name = caps.get(1)?.as_str();
    let mut parts = PARTY_SPLIT.splitn(name, 2);
    let one = parts.next()?.trim();
    let two = parts.next()?.trim();
    Some((one.to_string(), two.to_string()))
}

/// The abbreviation, volume, and page of the last reporter-table entry
/// matching `text`.
fn extract_reporter_cite(text: &str) -> Option<(&'static str, String, String)> {
    let mut found: Option<(&'static str, String, String)> = None;
    for rep in reporter_table() {
        if let Some((volume, page)) = rep.capture(text) {
            if let Some((previous, _, _)) = &found {
                debug!(
                    previous = *previous,
                    selected = rep.abbreviation,
                    "overlapping reporter patterns, keeping the later entry"
                );
            }
            found = Some((rep.abbreviation, volume, page));
        }
    }
    found
}

/// Court text and 4-digit year from the first year-bearing parenthetical.
fn extract_court_year(text: &str) -> Option<(String, String)> {
    let caps = COURT_YEAR.captures(text)?;
    Some((caps[1].trim().to_string(), caps[2].to_string()))
}

fn extract_pinpoint(text: &str) -> Option<String> {
    PINPOINT.captures(text).map(|caps| caps[1].to_string())
}

/// Every subsequent-history phrase, trimmed, in reading order.
fn extract_history(text: &str) -> Vec<String> {
    HISTORY
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}
