//! Output formatting for validate command results.

use super::execute::ValidateResult;
use crate::output::{bullet_list, Outputable};

impl Outputable for ValidateResult {
    fn to_table(&self) -> String {
        let models = if self.models.is_empty() {
            "0".to_string()
        } else {
            format!("{} ({})", self.models.len(), self.models.join(", "))
        };

        let mut lines = vec![
            format!("✓ Configuration valid: {}", self.config),
            format!("Project: {} {}", self.project, self.version),
            format!("Models: {models}"),
            format!("Endpoints: {}", self.endpoints),
            String::new(),
        ];
        lines.extend(bullet_list(
            &format!("Routes ({}):", self.routes.len()),
            self.routes.iter().map(|r| r.to_string()),
            "(none)",
        ));
        lines.join("\n")
    }
}
