use serde::Serialize;

use super::ListPlatformsCmd;
use crate::commands::Execute;
use crate::config::Settings;
use crate::error::Error;
use crate::generator::{BACKEND_TARGETS, FRONTEND_TARGETS};

/// Supported target identifiers, in listing order.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformsResult {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
}

impl Execute for ListPlatformsCmd {
    type Output = PlatformsResult;

    fn execute(self, _settings: &Settings) -> Result<Self::Output, Error> {
        Ok(PlatformsResult {
            backend: BACKEND_TARGETS.iter().map(|s| s.to_string()).collect(),
            frontend: FRONTEND_TARGETS.iter().map(|s| s.to_string()).collect(),
        })
    }
}
