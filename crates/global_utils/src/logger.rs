use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Keeps the non-blocking writer alive, logs buffered at drop time are flushed.
pub struct LoggerGuard {
    _worker_guard: WorkerGuard,
}

/// Initializes the global subscriber, filtering by `RUST_LOG` (defaults to `info`).
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn init_logger() -> LoggerGuard {
    let (writer, worker_guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_target(true))
        .try_init();
    LoggerGuard {
        _worker_guard: worker_guard,
    }
}
