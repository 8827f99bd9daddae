//! Output formatting for list-platforms command results.

use super::execute::PlatformsResult;
use crate::output::{bullet_list, Outputable};

impl Outputable for PlatformsResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["=== Supported Platforms ===".to_string(), String::new()];
        lines.extend(bullet_list("Backend:", &self.backend, "(none)"));
        lines.push(String::new());
        lines.extend(bullet_list("Frontend:", &self.frontend, "(none)"));
        lines.join("\n")
    }
}
