//! Logging setup for the binary.
//!
//! Logs go to stderr so frames printed on stdout stay clean. The filter
//! comes from `RUST_LOG` and defaults to `warn`.

use std::sync::OnceLock;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT_GUARD: OnceLock<Result<(), InitError>> = OnceLock::new();

/// Errors emitted when configuring the tracing subscriber.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InitError {
    /// Another subscriber was installed outside this module.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

fn install() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| InitError::Install(err.to_string()))
}

/// Install the global subscriber once per process. Later calls do nothing.
pub fn init_tracing() {
    let result = INIT_GUARD.get_or_init(install);

    if let Err(err) = result {
        warn!("failed to initialise tracing subscriber: {err}");
    }
}
