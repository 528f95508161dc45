use tracing_appender::{non_blocking::WorkerGuard, rolling};

#[cfg(test)]
use once_cell::sync::Lazy;

/// Daily rolling log under `dir`, same subscriber shape the HR services use.
/// The returned guard must outlive the process's logging.
pub fn init(dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(dir, "hrm-core.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .pretty()
        .init();

    guard
}

/// Shared test subscriber; touch the Lazy at the top of a test.
#[cfg(test)]
pub static TEST_LOGGING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .pretty()
        .init();
});
