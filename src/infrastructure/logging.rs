//! Log file setup.
//!
//! The kiosk owns the whole terminal, so diagnostics go to `kiosk.log` in the
//! configured directory instead of stdout/stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "kiosk.log";

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered lines are lost on exit.
pub fn init_logging(log_dir: &Path) -> WorkerGuard {
    let appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .init();

    guard
}
