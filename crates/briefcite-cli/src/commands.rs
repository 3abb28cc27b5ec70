//! Subcommand handlers.

use anyhow::bail;
use briefcite_core::rules::RuleFlags;
use briefcite_core::{generate_citation, parse_citation};
use clap::Args;
use tracing::debug;

use crate::display;

/// Arguments for the parse subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Citation text to parse.
    pub citation: String,

    /// Emit the components as JSON instead of the card view.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Citation text to parse and reformat.
    pub citation: String,

    /// Rule identifier to enable (repeatable), e.g. 10.2.1.d.
    #[arg(long = "enable", value_name = "RULE")]
    pub enable: Vec<String>,

    /// Enable every cataloged rule.
    #[arg(long, conflicts_with = "enable")]
    pub all: bool,

    /// Emit the components and the formatted citation as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn parse(args: ParseArgs) -> anyhow::Result<()> {
    if args.citation.trim().is_empty() {
        bail!("citation text is empty");
    }

    let components = parse_citation(&args.citation);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&components)?);
    } else {
        display::print_components_card(&components);
    }
    Ok(())
}

pub fn format(args: FormatArgs) -> anyhow::Result<()> {
    if args.citation.trim().is_empty() {
        bail!("citation text is empty");
    }

    let flags = build_flags(&args)?;
    let components = parse_citation(&args.citation);
    let citation = generate_citation(&components, &flags);

    if args.json {
        let out = serde_json::json!({
            "components": components,
            "citation": citation,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{citation}");
    }
    Ok(())
}

pub fn rules() -> anyhow::Result<()> {
    display::print_rule_catalog();
    Ok(())
}

/// Assemble rule flags from the command line, validating each identifier
/// against the catalog.
fn build_flags(args: &FormatArgs) -> anyhow::Result<RuleFlags> {
    if args.all {
        debug!("enabling every cataloged rule");
        return Ok(RuleFlags::all_enabled());
    }

    let mut flags = RuleFlags::new();
    for id in &args.enable {
        flags.try_set(id, true)?;
    }
    debug!(enabled = args.enable.len(), "assembled rule flags");
    Ok(flags)
}
