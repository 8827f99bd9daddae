//! CLI parsing tests for list-platforms command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::commands::Command;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_parses_without_args() {
        let args = Args::try_parse_from(["api_scaffold", "list-platforms"]).unwrap();
        assert!(matches!(args.command, Command::ListPlatforms(_)));
    }

    crate::cli_error_test! {
        command: "list-platforms",
        test_name: test_rejects_positional,
        args: ["django"],
    }

    crate::cli_error_test! {
        command: "list-platforms",
        test_name: test_rejects_config,
        args: ["--config", "api.yaml"],
    }
}
