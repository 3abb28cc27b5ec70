//! Card display for parsed citations and the rule catalog.
//!
//! Renders citation components as a grouped, human-readable card with a
//! `-` placeholder for fields the parser left empty.

use briefcite_core::rules::RULE_CATALOG;
use briefcite_core::{CitationComponents, reporter_by_abbreviation};

// ── Components card ──

/// Print every component field as an aligned read-only card.
pub fn print_components_card(components: &CitationComponents) {
    println!("Parties");
    print_field("party_one", &components.party_one);
    print_field("party_two", &components.party_two);
    println!();

    println!("Reporter cite");
    print_field("volume", &components.volume);
    print_field("reporter", &components.reporter);
    let reporter_name = reporter_by_abbreviation(&components.reporter)
        .map(|r| r.name)
        .unwrap_or_default();
    print_field("reporter_name", reporter_name);
    print_field("page", &components.page);
    print_field("pinpoint", &components.pinpoint);
    println!();

    println!("Parenthetical");
    print_field("court", &components.court);
    print_field("year", &components.year);
    println!();

    println!("Subsequent history");
    if components.subsequent_history.is_empty() {
        print_field("history", "");
    } else {
        for (i, entry) in components.subsequent_history.iter().enumerate() {
            print_field(&format!("history[{i}]"), entry);
        }
    }
}

fn print_field(name: &str, value: &str) {
    if value.is_empty() {
        println!("  {:<26} -", name);
    } else {
        println!("  {:<26} {}", name, value);
    }
}

// ── Rule catalog ──

/// List the rule catalog: group headers, then each subrule with its
/// identifier and description. Entries whose flag the formatter never
/// consults are marked reserved.
pub fn print_rule_catalog() {
    for group in RULE_CATALOG {
        println!("Rule {}  {}{}", group.id, group.name, reserved_marker(group.wired));
        for sub in group.subrules {
            println!(
                "  {:<10} {}{}",
                sub.id,
                sub.description,
                reserved_marker(sub.wired)
            );
        }
        println!();
    }
}

fn reserved_marker(wired: bool) -> &'static str {
    if wired { "" } else { " (reserved)" }
}
