//! Tracing subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (same syntax as `RUST_LOG`)
pub const LOG_ENV: &str = "BOTIA_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "botia=debug";

/// Install the global subscriber, logging to stderr so stdout stays clean for
/// answers and `--json` output.
///
/// `verbose` wins over `BOTIA_LOG`. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let filter = build_filter(verbose, std::env::var(LOG_ENV).ok().as_deref());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(verbose: bool, env_value: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }

    env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
