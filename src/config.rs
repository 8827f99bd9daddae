//! Tool settings.
//!
//! Settings come from an optional `.api_scaffold.json` in the working
//! directory. They configure the tool itself; the API description being
//! compiled is loaded by [`crate::loader`].
//!
//! ```json
//! {
//!   "templates": "./templates",
//!   "log": "api_scaffold=debug"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// File name looked up in the working directory.
pub const SETTINGS_FILE: &str = ".api_scaffold.json";

/// Template directory used when neither the CLI nor the settings name one.
pub const DEFAULT_TEMPLATES: &str = "templates";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory holding `<kind>/<target>/<file>.tera` templates.
    #[serde(default)]
    pub templates: Option<PathBuf>,

    /// Log filter, used when `API_SCAFFOLD_LOG` is not set.
    #[serde(default)]
    pub log: Option<String>,
}

impl Settings {
    /// Load settings from the working directory.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(Path::new("."))
    }

    /// Load `.api_scaffold.json` from `dir`. A missing file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self, Error> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings_error = |message: String| Error::Settings {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(&path).map_err(|e| settings_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| settings_error(e.to_string()))
    }

    /// Template directory: the CLI value, then the settings value, then
    /// `./templates`.
    pub fn template_dir(&self, cli: Option<&Path>) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.templates.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES))
    }
}
