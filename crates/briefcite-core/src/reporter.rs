//! The federal reporter table.
//!
//! A fixed enumeration of the eight federal reporters the parser recognises,
//! each with a pattern for `<volume> <abbreviation> <page>` in free text
//! (case-insensitive, periods optional, whitespace collapsible).
//!
//! Entry order is a contract. The loose punctuation handling means a base
//! series pattern also matches inside its numbered successors ("F." matches
//! within an "F.2d" citation, capturing the series digit as the page), so
//! every base series is listed before its successors and the parser keeps
//! the LAST matching entry on conflict. Tests pin both the order and the
//! overlap.

use std::sync::LazyLock;

use regex::Regex;

/// One reporter series.
pub struct Reporter {
    /// Canonical Bluebook abbreviation (e.g. "F. Supp. 2d").
    pub abbreviation: &'static str,
    /// Full series name.
    pub name: &'static str,
    regex: Regex,
}

impl Reporter {
    /// Capture `(volume, page)` from the first occurrence of this reporter's
    /// citation form in `text`.
    pub fn capture(&self, text: &str) -> Option<(String, String)> {
        self.regex
            .captures(text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    }
}

/// Abbreviation, full name, and pattern source for each reporter, in
/// precedence order: later entries override earlier ones on conflict.
const REPORTERS: &[(&str, &str, &str)] = &[
    (
        "U.S.",
        "United States Reports",
        r"(?i)(\d+)\s+U\.?\s*S\.?\s*(\d+)",
    ),
    (
        "S. Ct.",
        "Supreme Court Reporter",
        r"(?i)(\d+)\s+S\.?\s*Ct\.?\s*(\d+)",
    ),
    (
        "L. Ed.",
        "Lawyers' Edition",
        r"(?i)(\d+)\s+L\.?\s*Ed\.?\s*(\d+)",
    ),
    (
        "F.",
        "Federal Reporter",
        r"(?i)(\d+)\s+F\.?\s*(\d+)",
    ),
    (
        "F.2d",
        "Federal Reporter, Second Series",
        r"(?i)(\d+)\s+F\.?\s*2d\.?\s*(\d+)",
    ),
    (
        "F.3d",
        "Federal Reporter, Third Series",
        r"(?i)(\d+)\s+F\.?\s*3d\.?\s*(\d+)",
    ),
    (
        "F. Supp.",
        "Federal Supplement",
        r"(?i)(\d+)\s+F\.?\s*Supp\.?\s*(\d+)",
    ),
    (
        "F. Supp. 2d",
        "Federal Supplement, Second Series",
        r"(?i)(\d+)\s+F\.?\s*Supp\.?\s*2d\.?\s*(\d+)",
    ),
];

static TABLE: LazyLock<Vec<Reporter>> = LazyLock::new(|| {
    REPORTERS
        .iter()
        .map(|&(abbreviation, name, pattern)| Reporter {
            abbreviation,
            name,
            regex: Regex::new(pattern).expect("reporter pattern should compile"),
        })
        .collect()
});

/// The reporter table in fixed precedence order.
pub fn reporter_table() -> &'static [Reporter] {
    &TABLE
}

/// Look up a reporter by its canonical abbreviation.
pub fn reporter_by_abbreviation(abbreviation: &str) -> Option<&'static Reporter> {
    TABLE.iter().find(|r| r.abbreviation == abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: the abbreviation of the last table entry matching `text`.
    fn last_match(text: &str) -> Option<&'static str> {
        let mut hit = None;
        for rep in reporter_table() {
            if rep.capture(text).is_some() {
                hit = Some(rep.abbreviation);
            }
        }
        hit
    }

    #[test]
    fn table_order_is_fixed() {
        let abbrevs: Vec<&str> = reporter_table().iter().map(|r| r.abbreviation).collect();
        assert_eq!(
            abbrevs,
            vec![
                "U.S.",
                "S. Ct.",
                "L. Ed.",
                "F.",
                "F.2d",
                "F.3d",
                "F. Supp.",
                "F. Supp. 2d",
            ]
        );
    }

    #[test]
    fn each_reporter_matches_its_canonical_form() {
        let cases = [
            ("347 U.S. 483", "U.S.", "347", "483"),
            ("112 S. Ct. 2791", "S. Ct.", "112", "2791"),
            ("98 L. Ed. 873", "L. Ed.", "98", "873"),
            ("150 F. 230", "F.", "150", "230"),
            ("342 F.2d 684", "F.2d", "342", "684"),
            ("183 F.3d 730", "F.3d", "183", "730"),
            ("867 F. Supp. 654", "F. Supp.", "867", "654"),
            ("78 F. Supp. 2d 1177", "F. Supp. 2d", "78", "1177"),
        ];
        for (text, abbrev, volume, page) in cases {
            let rep = reporter_by_abbreviation(abbrev).unwrap();
            let (v, p) = rep
                .capture(text)
                .unwrap_or_else(|| panic!("{abbrev} should match {text:?}"));
            assert_eq!(v, volume, "{abbrev} volume");
            assert_eq!(p, page, "{abbrev} page");
        }
    }

    #[test]
    fn matching_is_case_insensitive_and_punctuation_flexible() {
        let us = reporter_by_abbreviation("U.S.").unwrap();
        for text in ["347 u.s. 483", "347 US 483", "347 U. S. 483"] {
            assert_eq!(
                us.capture(text),
                Some(("347".into(), "483".into())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn base_series_pattern_overlaps_second_series_text() {
        // The documented conflict: "F." also matches inside an F.2d citation,
        // capturing the series digit as the page.
        let f = reporter_by_abbreviation("F.").unwrap();
        assert_eq!(f.capture("342 F.2d 684"), Some(("342".into(), "2".into())));

        let f_supp = reporter_by_abbreviation("F. Supp.").unwrap();
        assert_eq!(
            f_supp.capture("78 F. Supp. 2d 1177"),
            Some(("78".into(), "2".into()))
        );
    }

    #[test]
    fn later_entry_wins_on_overlap() {
        assert_eq!(last_match("342 F.2d 684"), Some("F.2d"));
        assert_eq!(last_match("183 F.3d 730"), Some("F.3d"));
        assert_eq!(last_match("78 F. Supp. 2d 1177"), Some("F. Supp. 2d"));
        // No overlap for plain base-series citations.
        assert_eq!(last_match("150 F. 230"), Some("F."));
        assert_eq!(last_match("867 F. Supp. 654"), Some("F. Supp."));
    }

    #[test]
    fn base_series_does_not_match_supplement_text() {
        let f = reporter_by_abbreviation("F.").unwrap();
        assert!(f.capture("867 F. Supp. 654").is_none());
    }

    #[test]
    fn capture_takes_first_occurrence() {
        let us = reporter_by_abbreviation("U.S.").unwrap();
        assert_eq!(
            us.capture("410 U.S. 113, aff'd, 500 U.S. 1"),
            Some(("410".into(), "113".into()))
        );
    }

    #[test]
    fn unknown_abbreviation_lookup() {
        assert!(reporter_by_abbreviation("P.2d").is_none());
    }
}
