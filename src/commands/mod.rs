//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl producing a serializable result
//! - An `Outputable` impl rendering that result as a table

mod generate;
mod list_platforms;
mod validate;

pub use generate::GenerateCmd;
pub use list_platforms::{ListPlatformsCmd, PlatformsResult};
pub use validate::{ValidateCmd, ValidateResult};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::Error;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Error>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate backend and/or frontend code from an API description
    Generate(GenerateCmd),

    /// Check an API description without generating anything
    Validate(ValidateCmd),

    /// List supported backend and frontend platforms
    ListPlatforms(ListPlatformsCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Error> {
        match self {
            Command::Generate(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
            Command::Validate(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
            Command::ListPlatforms(cmd) => {
                let result = cmd.execute(settings)?;
                Ok(result.format(format))
            }
        }
    }
}
