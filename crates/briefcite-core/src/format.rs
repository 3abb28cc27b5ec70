//! Citation formatting.
//!
//! Deterministic assembly of a citation string from parsed components and
//! the caller's rule toggles. Segments come out in Bluebook order, and a
//! segment whose source data is empty is skipped along with its separator.
//! Only the subsequent-history segment is gated on a rule flag.

use std::sync::LazyLock;

use regex::Regex;

use crate::citation::CitationComponents;
use crate::rules::{ABBREVIATE_BUSINESS, INCLUDE_HISTORY, OMIT_LEADING_THE, RuleFlags};

/// Business designations abbreviated under Rule 10.2.1(c), as
/// (full word, abbreviation) pairs.
const BUSINESS_DESIGNATIONS: &[(&str, &str)] = &[
    ("Corporation", "Corp."),
    ("Incorporated", "Inc."),
    ("Limited", "Ltd."),
    ("Company", "Co."),
];

// Word-bounded so "Reincorporated" and the like stay untouched.
static BUSINESS_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    BUSINESS_DESIGNATIONS
        .iter()
        .map(|&(word, abbreviation)| {
            let pattern = format!(r"(?i)\b{word}\b");
            (
                Regex::new(&pattern).expect("business-designation pattern should compile"),
                abbreviation,
            )
        })
        .collect()
});

/// Combine the two parties into a case name and apply the enabled
/// case-name rules.
///
/// Returns the empty string when either party is missing. Rule 10.2.1(d)
/// (omit a leading "The") runs before Rule 10.2.1(c) (abbreviate business
/// designations), and 10.2.1(c) replaces every occurrence across the
/// combined name rather than per party.
pub fn format_case_name(party_one: &str, party_two: &str, flags: &RuleFlags) -> String {
    if party_one.is_empty() || party_two.is_empty() {
        return String::new();
    }

    let mut name = format!("{party_one} v. {party_two}");

    if flags.enabled(OMIT_LEADING_THE) {
        name = strip_leading_the(&name);
    }
    if flags.enabled(ABBREVIATE_BUSINESS) {
        name = abbreviate_business_designations(&name);
    }

    name
}

/// Drop a leading "The " (any case) from `name`.
fn strip_leading_the(name: &str) -> String {
    let bytes = name.as_bytes();
    if bytes.len() > 4 && bytes[..4].eq_ignore_ascii_case(b"the ") {
        name[4..].to_string()
    } else {
        name.to_string()
    }
}

/// Replace every spelled-out business designation with its abbreviation.
fn abbreviate_business_designations(name: &str) -> String {
    let mut name = name.to_string();
    for (pattern, abbreviation) in BUSINESS_PATTERNS.iter() {
        name = pattern.replace_all(&name, *abbreviation).into_owned();
    }
    name
}

/// Assemble the formatted citation from `components` and the enabled rules.
///
/// Segments are appended strictly in order: case name, reporter cite,
/// pinpoint, court/year parenthetical, subsequent history. The reporter
/// cite requires volume, reporter, and page all present; the history
/// segment requires the group flag for Rule 10.7 on top of non-empty
/// history entries. Everything else is emitted whenever its data is
/// present, no flag consulted.
pub fn generate_citation(components: &CitationComponents, flags: &RuleFlags) -> String {
    let mut citation = format_case_name(&components.party_one, &components.party_two, flags);

    if components.has_reporter_cite() {
        citation.push_str(&format!(
            ", {} {} {}",
            components.volume, components.reporter, components.page
        ));
    }
    if !components.pinpoint.is_empty() {
        citation.push_str(&format!(", {}", components.pinpoint));
    }
    citation.push_str(&court_year_segment(components));
    if flags.enabled(INCLUDE_HISTORY) && !components.subsequent_history.is_empty() {
        citation.push_str(&format!(", {}", components.subsequent_history.join(", ")));
    }

    citation
}

/// The " (court year)" parenthetical, or empty when both parts are missing.
/// A single space separates court and year only when both are present.
fn court_year_segment(components: &CitationComponents) -> String {
    let court = &components.court;
    let year = &components.year;
    match (court.is_empty(), year.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!(" ({court})"),
        (true, false) => format!(" ({year})"),
        (false, false) => format!(" ({court} {year})"),
    }
}
