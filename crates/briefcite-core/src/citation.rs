//! Parsed citation components shared by the parser and formatter.

use serde::{Deserialize, Serialize};

/// The components of a single federal case citation.
///
/// Produced by [`parse_citation`](crate::parse_citation) and consumed by
/// [`generate_citation`](crate::generate_citation). Every field defaults to
/// empty: a component the parser could not find is left at its default
/// rather than reported as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationComponents {
    /// First named party (before the "v." separator).
    pub party_one: String,
    /// Second named party (after the "v." separator).
    pub party_two: String,
    /// Reporter volume number.
    pub volume: String,
    /// Reporter abbreviation from the reporter table (e.g. "F.3d").
    pub reporter: String,
    /// Starting page within the reporter volume.
    pub page: String,
    /// Deciding court from the parenthetical, year stripped.
    pub court: String,
    /// Four-digit decision year from the parenthetical.
    pub year: String,
    /// Pinpoint page reference, if any.
    pub pinpoint: String,
    /// Subsequent-history annotations in source order (e.g. "aff'd, 500 U.S. 1").
    pub subsequent_history: Vec<String>,
}

impl CitationComponents {
    /// True when no component matched at all.
    pub fn is_empty(&self) -> bool {
        self.party_one.is_empty()
            && self.party_two.is_empty()
            && self.volume.is_empty()
            && self.reporter.is_empty()
            && self.page.is_empty()
            && self.court.is_empty()
            && self.year.is_empty()
            && self.pinpoint.is_empty()
            && self.subsequent_history.is_empty()
    }

    /// True when volume, reporter, and page are all present, which is the
    /// precondition for the reporter segment of a formatted citation.
    pub fn has_reporter_cite(&self) -> bool {
        !self.volume.is_empty() && !self.reporter.is_empty() && !self.page.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let c = CitationComponents::default();
        assert!(c.is_empty());
        assert!(!c.has_reporter_cite());
    }

    #[test]
    fn any_single_field_makes_it_non_empty() {
        let c = CitationComponents {
            year: "1954".into(),
            ..Default::default()
        };
        assert!(!c.is_empty());
    }

    #[test]
    fn reporter_cite_requires_all_three_fields() {
        let partial = CitationComponents {
            volume: "347".into(),
            page: "483".into(),
            ..Default::default()
        };
        assert!(!partial.has_reporter_cite(), "reporter abbreviation missing");

        let full = CitationComponents {
            reporter: "U.S.".into(),
            ..partial
        };
        assert!(full.has_reporter_cite());
    }

    #[test]
    fn components_json_roundtrip() {
        let c = CitationComponents {
            party_one: "Brown".into(),
            party_two: "Board of Education".into(),
            volume: "347".into(),
            reporter: "U.S.".into(),
            page: "483".into(),
            year: "1954".into(),
            subsequent_history: vec!["aff'd, 349 U.S. 294".into()],
            ..Default::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let parsed: CitationComponents = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, c);
        assert_eq!(parsed.subsequent_history.len(), 1);
    }
}
