//! File logging.
//!
//! The terminal belongs to the clock face, so logs go to
//! `<data dir>/countdown.log`. `RUST_LOG` overrides the default `info`
//! filter, e.g. `RUST_LOG=countdown_core=debug`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "countdown.log";

/// Install the global subscriber.
///
/// The returned guard flushes buffered lines on drop and must live until
/// exit. Returns `None` when no log directory is available; logging is then
/// disabled rather than sent to the terminal.
pub fn init() -> Option<WorkerGuard> {
    let dir = match countdown_core::storage::data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("logging disabled: {e}");
            return None;
        }
    };

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(filter)
        .init();

    tracing::info!(log_dir = %dir.display(), "countdown logging initialized");
    Some(guard)
}
