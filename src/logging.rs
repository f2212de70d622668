//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the sequence on stdout. The
//! level comes from the `--verbose` flag only; the environment is not
//! consulted.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed, which leaves the
/// existing one in place.
pub fn init_logging(verbose: bool) -> bool {
    let env_filter = EnvFilter::new(filter_directive(verbose));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .try_init()
        .is_ok()
}

fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "fizzbuzz_rs=debug,warn"
    } else {
        "warn"
    }
}
