use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::{LogConfig, log::ConsoleFormat};

/// Builds the filter directive string, e.g. `info,sqlx=error`.
pub fn filter_directives(log_config: &LogConfig) -> String {
    let mut filter_string = log_config.level.clone();

    if let Some(ext_levels) = &log_config.ext_level {
        let mut targets: Vec<_> = ext_levels.iter().collect();
        targets.sort();
        for (target, level) in targets {
            filter_string.push_str(&format!(",{}={}", target, level));
        }
    }

    filter_string
}

/// Installs the global subscriber. The returned guard flushes the file sink
/// on drop and must be held for the lifetime of the program.
pub fn init_logging(log_config: &LogConfig) -> Option<WorkerGuard> {
    let mut guard = None;

    let file_layer = if log_config.file_enabled {
        log_config.dir.as_ref().map(|dir| {
            let file_appender = tracing_appender::rolling::daily(dir, "starter.log");
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
            guard = Some(worker_guard);

            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_span_events(FmtSpan::CLOSE)
                .with_current_span(true)
                .with_thread_ids(true)
                .with_target(true)
                .boxed()
        })
    } else {
        None
    };

    let console_layer = match log_config.console_format {
        ConsoleFormat::Json => fmt::layer()
            .json()
            .with_timer(ChronoLocal::rfc_3339())
            .with_target(true)
            .boxed(),
        ConsoleFormat::Compact => fmt::layer()
            .compact()
            .with_timer(ChronoLocal::rfc_3339())
            .with_target(false)
            .boxed(),
        ConsoleFormat::Pretty => fmt::layer()
            .pretty()
            .with_timer(ChronoLocal::rfc_3339())
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}
