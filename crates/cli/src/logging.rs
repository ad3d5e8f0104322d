//! Logging setup for the command line.
//!
//! Diagnostics go to stderr so that stdout only carries command output.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding a `tracing` filter directive, e.g. `bp_core=debug`.
pub const LOG_ENV: &str = "BAGPIPE_LOG";

/// Installs the global subscriber. `BAGPIPE_LOG` wins over `verbose`.
pub fn init(verbose: bool) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
