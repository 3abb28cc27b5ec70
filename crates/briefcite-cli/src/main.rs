//! briefcite CLI entry point.
//!
//! Assembles subcommands and dispatches to handler functions.

use clap::Parser;

mod commands;
mod display;

/// Bluebook case-citation toolchain.
///
/// Parses free-text case citations into their components and reformats
/// them under toggleable Bluebook rules.
#[derive(Parser, Debug)]
#[command(name = "briefcite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Parse a citation and display its components.
    Parse(commands::ParseArgs),
    /// Parse a citation and reformat it under the enabled rules.
    Format(commands::FormatArgs),
    /// List the rule catalog.
    Rules,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::debug!("briefcite v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => commands::parse(args),
        Commands::Format(args) => commands::format(args),
        Commands::Rules => commands::rules(),
    }
}
