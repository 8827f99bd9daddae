mod cli_tests;
mod execute;
mod output;

use clap::Args;

pub use execute::PlatformsResult;

/// List the backend and frontend identifiers `generate` accepts
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  api_scaffold list-platforms                 # Human-readable lists
  api_scaffold list-platforms --format json   # Machine-readable")]
pub struct ListPlatformsCmd {}
