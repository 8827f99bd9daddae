mod execute;
mod output;
mod output_tests;

use std::path::PathBuf;

use clap::Args;

/// Generate backend and/or frontend code from an API description
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  api_scaffold generate -c api.yaml -b django -o out              # Django backend into out/backend
  api_scaffold generate -c api.json -f flutter -o out             # Flutter client into out/frontend
  api_scaffold generate -c api.yaml -b express -f typescript -o out -t ./templates")]
pub struct GenerateCmd {
    /// API description (.json selects JSON, anything else YAML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Backend target (see list-platforms)
    #[arg(short, long)]
    pub backend: Option<String>,

    /// Frontend target (see list-platforms)
    #[arg(short, long)]
    pub frontend: Option<String>,

    /// Output directory; targets write to <output>/backend and <output>/frontend
    #[arg(short, long)]
    pub output: PathBuf,

    /// Template directory (default: settings file, then ./templates)
    #[arg(short, long)]
    pub templates: Option<PathBuf>,
}
