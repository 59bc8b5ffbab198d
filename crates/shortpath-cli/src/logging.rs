//! Tracing subscriber setup for the `shortpath` binary.
//!
//! Log output goes to stderr so stdout carries only command results. The
//! filter comes from `--verbose` / `--quiet` when either is given, otherwise
//! from the `SHORTPATH_LOG` environment variable (`EnvFilter` syntax),
//! otherwise `warn`.
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "SHORTPATH_LOG";

/// Directive implied by the verbosity flags, if any was given.
pub fn flag_directive(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some("debug")
    } else if quiet {
        Some("error")
    } else {
        None
    }
}

/// Builds the filter: flags first, then `SHORTPATH_LOG`, then `warn`.
pub fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    match flag_directive(verbose, quiet) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: bool, quiet: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
