use super::GenerateCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::error::Error;
use crate::generator::{self, GenerateRequest, GenerationReport};

impl Execute for GenerateCmd {
    type Output = GenerationReport;

    fn execute(self, settings: &Settings) -> Result<Self::Output, Error> {
        let request = GenerateRequest {
            templates: settings.template_dir(self.templates.as_deref()),
            config: self.config,
            backend: self.backend,
            frontend: self.frontend,
            output: self.output,
        };
        generator::run(&request)
    }
}
