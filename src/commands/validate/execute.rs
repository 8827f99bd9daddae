use serde::Serialize;

use super::ValidateCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::error::Error;
use crate::http::Route;
use crate::loader;

/// Summary of a description that loaded cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    pub config: String,
    pub project: String,
    pub version: String,
    pub models: Vec<String>,
    pub endpoints: usize,
    pub routes: Vec<Route>,
}

impl Execute for ValidateCmd {
    type Output = ValidateResult;

    fn execute(self, _settings: &Settings) -> Result<Self::Output, Error> {
        let spec = loader::load_path(&self.config)?;

        Ok(ValidateResult {
            config: self.config.display().to_string(),
            project: spec.project.name.clone(),
            version: spec.project.version.clone(),
            models: spec.models.iter().map(|m| m.name.clone()).collect(),
            endpoints: spec.endpoints.len(),
            routes: spec.routes(),
        })
    }
}
