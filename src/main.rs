use std::process::ExitCode;

use clap::Parser;

use api_scaffold::cli::Args;
use api_scaffold::config::Settings;
use api_scaffold::logging;

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("✗ Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(settings.log.as_deref());

    match args.command.run(&settings, args.format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("✗ Error: {e}");
            ExitCode::FAILURE
        }
    }
}
