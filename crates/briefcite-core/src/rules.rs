//! The Bluebook rule catalog and per-call rule toggles.
//!
//! Three rule groups are modeled: case-name formatting (10.2.1), the court
//! and year parenthetical (10.4), and subsequent history (10.7). Only the
//! three identifiers exported as constants below are consulted by the
//! formatter; the rest of the catalog shows up as reserved toggles that
//! change nothing. Tests pin exactly which identifiers are wired.

use std::collections::HashMap;

use thiserror::Error;

/// Flag key for Rule 10.2.1(c): abbreviate business designations.
pub const ABBREVIATE_BUSINESS: &str = "10.2.1.c";
/// Flag key for Rule 10.2.1(d): omit a leading "The" from the case name.
pub const OMIT_LEADING_THE: &str = "10.2.1.d";
/// Flag key for Rule 10.7: append subsequent history to the citation.
pub const INCLUDE_HISTORY: &str = "10.7";

/// A single toggleable subrule.
pub struct Subrule {
    pub id: &'static str,
    pub description: &'static str,
    /// Whether the formatter consults this flag. Reserved entries are still
    /// listed and toggleable, but have no effect on output.
    pub wired: bool,
}

/// A top-level rule group.
pub struct RuleGroup {
    pub id: &'static str,
    pub name: &'static str,
    /// Whether the formatter consults the group flag itself (true only for
    /// subsequent history, which toggles as a whole).
    pub wired: bool,
    pub subrules: &'static [Subrule],
}

/// The full rule catalog, read-only reference data for callers.
pub const RULE_CATALOG: &[RuleGroup] = &[
    RuleGroup {
        id: "10.2.1",
        name: "Case-name formatting",
        wired: false,
        subrules: &[
            Subrule {
                id: "10.2.1.a",
                description: "Abbreviate common words in party names",
                wired: false,
            },
            Subrule {
                id: "10.2.1.b",
                description: "Retain procedural phrases (\"In re\", \"Ex parte\")",
                wired: false,
            },
            Subrule {
                id: "10.2.1.c",
                description: "Abbreviate business designations (Corp., Inc., Ltd., Co.)",
                wired: true,
            },
            Subrule {
                id: "10.2.1.d",
                description: "Omit \"The\" as the first word of a case name",
                wired: true,
            },
            Subrule {
                id: "10.2.1.e",
                description: "Retain descriptive terms (\"Estate of\", \"Will of\")",
                wired: false,
            },
            Subrule {
                id: "10.2.1.f",
                description: "Abbreviate geographic terms",
                wired: false,
            },
        ],
    },
    RuleGroup {
        id: "10.4",
        name: "Court and year parenthetical",
        wired: false,
        subrules: &[
            Subrule {
                id: "10.4.a",
                description: "Identify the deciding court",
                wired: false,
            },
            Subrule {
                id: "10.4.b",
                description: "Give the year of decision",
                wired: false,
            },
        ],
    },
    RuleGroup {
        id: "10.7",
        name: "Subsequent history",
        wired: true,
        subrules: &[
            Subrule {
                id: "10.7.a",
                description: "Include decisions affirmed (\"aff'd\")",
                wired: false,
            },
            Subrule {
                id: "10.7.b",
                description: "Include decisions reversed (\"rev'd\")",
                wired: false,
            },
            Subrule {
                id: "10.7.c",
                description: "Include denials of certiorari (\"cert. denied\")",
                wired: false,
            },
        ],
    },
];

/// True if `id` names a group or subrule in the catalog.
pub fn known_rule(id: &str) -> bool {
    RULE_CATALOG
        .iter()
        .any(|g| g.id == id || g.subrules.iter().any(|s| s.id == id))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown rule identifier: {0}")]
    UnknownRule(String),
}

/// Enabled/disabled state for catalog rules, keyed by rule identifier.
///
/// The formatter treats this as an opaque lookup table: a missing key means
/// disabled, and keys outside the catalog are never consulted. Use
/// [`RuleFlags::try_set`] when the identifier comes from user input and
/// should be checked against the catalog.
#[derive(Debug, Clone, Default)]
pub struct RuleFlags {
    flags: HashMap<String, bool>,
}

impl RuleFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// The enabled state for `id`; missing keys are disabled.
    pub fn enabled(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Set a flag without validation. Keys outside the catalog are accepted
    /// and simply never consulted.
    pub fn set(&mut self, id: impl Into<String>, on: bool) {
        self.flags.insert(id.into(), on);
    }

    /// Set a flag, rejecting identifiers not present in the catalog.
    pub fn try_set(&mut self, id: &str, on: bool) -> Result<(), RuleError> {
        if !known_rule(id) {
            return Err(RuleError::UnknownRule(id.to_string()));
        }
        self.set(id, on);
        Ok(())
    }

    /// Flags with every cataloged group and subrule enabled.
    pub fn all_enabled() -> Self {
        let mut flags = Self::new();
        for group in RULE_CATALOG {
            flags.set(group.id, true);
            for sub in group.subrules {
                flags.set(sub.id, true);
            }
        }
        flags
    }
}
