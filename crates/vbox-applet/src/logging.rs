//! Tracing setup: console output plus a daily-rolling log file.

use crate::config::project_dirs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_FILTER: &str = "vbox_applet=debug,vbox_applet_core=debug";
const LOG_FILE_PREFIX: &str = "vbox-applet.log";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
///
/// The returned guard flushes the file writer and must live until exit.
pub fn init() -> Option<WorkerGuard> {
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let Some(log_dir) = project_dirs().map(|dirs| dirs.data_dir().join("logs")) else {
        tracing_subscriber::fmt().with_env_filter(filter()).init();
        return None;
    };

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Some(guard)
}
