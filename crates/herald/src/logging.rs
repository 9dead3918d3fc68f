//! Tracing setup for applications embedding Herald

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Set up tracing with two layers:
/// - Console: controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.herald/logs/
///
/// Keep the returned guard alive for as long as file logs should be flushed.
/// Returns `None` when only the console layer could be installed, or when a
/// global subscriber was already set.
pub fn init_tracing() -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender = tracing_appender::rolling::daily(&log_dir, "herald.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let installed = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .try_init();

        return installed.ok().map(|_| guard);
    }

    // Fallback: console only
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_filter(console_filter),
        )
        .try_init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<PathBuf> {
    let log_dir = log_dir_in(&dirs::home_dir()?);
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}

fn log_dir_in(home: &Path) -> PathBuf {
    home.join(".herald").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_layout() {
        let dir = log_dir_in(Path::new("/home/dev"));
        assert_eq!(dir, PathBuf::from("/home/dev/.herald/logs"));
    }
}
