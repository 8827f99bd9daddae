//! CLI parsing tests for validate command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_required_arg_test! {
        command: "validate",
        test_name: test_requires_config,
        required_arg: "--config",
    }

    crate::cli_option_test! {
        command: "validate",
        variant: Validate,
        test_name: test_with_short_config,
        args: ["-c", "api.json"],
        field: config,
        expected: PathBuf::from("api.json"),
    }

    crate::cli_error_test! {
        command: "validate",
        test_name: test_rejects_backend,
        args: ["-c", "api.yaml", "--backend", "django"],
    }
}
