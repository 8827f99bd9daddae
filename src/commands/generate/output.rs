//! Output formatting for generate command results.

use crate::generator::GenerationReport;
use crate::output::Outputable;

impl Outputable for GenerationReport {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Generated: {}", self.project));
        lines.push(format!("Output: {}", self.output));

        for target in &self.targets {
            lines.push(String::new());
            lines.push(format!(
                "{} {} ({} file(s)) -> {}",
                target.kind,
                target.target,
                target.files.len(),
                target.root
            ));
            for file in &target.files {
                lines.push(format!("  {file}"));
            }
        }

        lines.push(String::new());
        lines.push(format!("✓ {} file(s) written", self.file_count()));
        lines.join("\n")
    }
}
