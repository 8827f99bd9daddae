//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;

use crate::commands::Command;
use crate::output::OutputFormat;

/// Compile one API description into server and client code.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["api_scaffold", "list-platforms"], OutputFormat::Table)]
    #[case(&["api_scaffold", "--format", "json", "list-platforms"], OutputFormat::Json)]
    #[case(&["api_scaffold", "list-platforms", "--format", "toon"], OutputFormat::Toon)]
    fn test_global_format(#[case] argv: &[&str], #[case] expected: OutputFormat) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.format, expected);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["api_scaffold", "--format", "xml", "list-platforms"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["api_scaffold"]).is_err());
    }
}
