//! Logging setup for the binary and the API server.
//!
//! Logs go to stderr so `--json` output on stdout stays parseable.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Library modules that are pinned to `warn`
pub const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "tower_http", "tungstenite"];

fn build_filter(log_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }
    EnvFilter::new(directives)
}

/// Install the global subscriber.
///
/// `log_format` is `"json"` for structured lines, anything else for the
/// human-readable format. `RUST_LOG` overrides `log_level` when set.
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(log_level: &str, log_format: &str) {
    let filter = build_filter(log_level);
    let subscriber = tracing_subscriber::registry().with(filter);

    if log_format == "json" {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let _ = subscriber.with(fmt_layer).try_init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        let _ = subscriber.with(fmt_layer).try_init();
    }

    tracing::debug!(log_level = %log_level, log_format = %log_format, "logging initialized");
}
