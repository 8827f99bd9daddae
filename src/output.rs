//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// Indented list under a heading, or `empty` when there are no items.
pub fn bullet_list<I, S>(heading: &str, items: I, empty: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = vec![heading.to_string()];
    let start = lines.len();
    lines.extend(items.into_iter().map(|item| format!("  {}", item.as_ref())));
    if lines.len() == start {
        lines.push(format!("  {empty}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        count: usize,
    }

    impl Outputable for Sample {
        fn to_table(&self) -> String {
            format!("{} ({})", self.name, self.count)
        }
    }

    #[test]
    fn test_format_dispatch() {
        let sample = Sample {
            name: "blog".to_string(),
            count: 2,
        };
        assert_eq!(sample.format(OutputFormat::Table), "blog (2)");
        let json: serde_json::Value =
            serde_json::from_str(&sample.format(OutputFormat::Json)).unwrap();
        assert_eq!(json["count"], 2);
        assert!(sample.format(OutputFormat::Toon).contains("blog"));
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            bullet_list("Models:", ["User", "Post"], "(none)"),
            vec!["Models:", "  User", "  Post"]
        );
        assert_eq!(
            bullet_list("Models:", Vec::<String>::new(), "(none)"),
            vec!["Models:", "  (none)"]
        );
    }
}
