//! Diagnostics via `tracing`, written to stderr.
//!
//! `API_SCAFFOLD_LOG` takes a plain level (`debug`, scoped to this crate) or a
//! full filter spec such as `api_scaffold=debug,tera=warn`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "API_SCAFFOLD_LOG";

const CRATE_ROOT: &str = "api_scaffold";

/// Filter spec from, in order: the environment, the settings file, `warn`.
pub fn filter_spec(env: Option<&str>, settings: Option<&str>) -> String {
    match env.or(settings) {
        Some(level) if is_plain_level(level) => {
            format!("{CRATE_ROOT}={}", level.to_ascii_lowercase())
        }
        Some(spec) => spec.to_string(),
        None => format!("{CRATE_ROOT}=warn"),
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(settings_log: Option<&str>) {
    let env = std::env::var(LOG_ENV).ok();
    let filter = filter_spec(env.as_deref(), settings_log);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
