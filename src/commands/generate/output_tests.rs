//! Output formatting tests for generate command.

#[cfg(test)]
mod tests {
    use crate::generator::{GenerationReport, TargetKind, TargetReport};
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const BACKEND_TABLE: &str = "\
Generated: blog-api
Output: out

backend express (3 file(s)) -> out/backend
  package.json
  src/server.js
  src/models/User.js

✓ 3 file(s) written";

    const BOTH_TABLE: &str = "\
Generated: blog-api
Output: out

backend django (2 file(s)) -> out/backend
  blog_api/settings.py
  manage.py

frontend flutter (1 file(s)) -> out/frontend
  pubspec.yaml

✓ 3 file(s) written";

    // =========================================================================
    // Fixtures
    // =========================================================================

    fn target(kind: TargetKind, id: &str, files: &[&str]) -> TargetReport {
        TargetReport {
            kind,
            target: id.to_string(),
            root: format!("out/{kind}"),
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[fixture]
    fn backend_report() -> GenerationReport {
        GenerationReport {
            project: "blog-api".to_string(),
            output: "out".to_string(),
            targets: vec![target(
                TargetKind::Backend,
                "express",
                &["package.json", "src/server.js", "src/models/User.js"],
            )],
        }
    }

    #[fixture]
    fn both_report() -> GenerationReport {
        GenerationReport {
            project: "blog-api".to_string(),
            output: "out".to_string(),
            targets: vec![
                target(
                    TargetKind::Backend,
                    "django",
                    &["blog_api/settings.py", "manage.py"],
                ),
                target(TargetKind::Frontend, "flutter", &["pubspec.yaml"]),
            ],
        }
    }

    // =========================================================================
    // Table format tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_backend,
        fixture: backend_report,
        fixture_type: GenerationReport,
        expected: BACKEND_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_both,
        fixture: both_report,
        fixture_type: GenerationReport,
        expected: BOTH_TABLE,
    }

    // =========================================================================
    // JSON format tests
    // =========================================================================

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: both_report,
        fixture_type: GenerationReport,
        assertions: {
            "project": "blog-api",
            "output": "out",
        },
    }

    #[rstest]
    fn test_format_json_targets(both_report: GenerationReport) {
        use crate::output::{OutputFormat, Outputable};

        let parsed: serde_json::Value =
            serde_json::from_str(&both_report.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["targets"][0]["kind"], "backend");
        assert_eq!(parsed["targets"][1]["kind"], "frontend");
        assert_eq!(parsed["targets"][1]["files"][0], "pubspec.yaml");
    }

    // =========================================================================
    // Toon format tests
    // =========================================================================

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: both_report,
        fixture_type: GenerationReport,
        contains: ["blog-api", "django", "flutter", "pubspec.yaml"],
    }
}
