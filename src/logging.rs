use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

// Keeps the non-blocking writer alive for the process lifetime.
static GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Installs the rolling daily file subscriber.
///
/// Calling this more than once is harmless; only the first call installs.
pub fn init(log_dir: &str) {
    GUARD.get_or_init(|| {
        let file_appender = rolling::daily(log_dir, "app.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let _ = tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_target(false) // removes module path
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .pretty()
            .try_init();

        guard
    });
}
