mod cli_tests;
mod execute;
mod output;
mod output_tests;

use std::path::PathBuf;

use clap::Args;

pub use execute::ValidateResult;

/// Load and check an API description without generating anything
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  api_scaffold validate -c api.yaml                  # Check a YAML description
  api_scaffold validate -c api.json --format json    # Summary as JSON")]
pub struct ValidateCmd {
    /// API description (.json selects JSON, anything else YAML)
    #[arg(short, long)]
    pub config: PathBuf,
}
