pub mod citation;
pub mod format;
pub mod parse;
pub mod reporter;
pub mod rules;

pub use citation::CitationComponents;
pub use format::{format_case_name, generate_citation};
pub use parse::parse_citation;
pub use reporter::{Reporter, reporter_by_abbreviation, reporter_table};
pub use rules::{RULE_CATALOG, RuleError, RuleFlags, RuleGroup, Subrule, known_rule};
