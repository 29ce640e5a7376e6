//! Logging setup: compact console output plus hourly JSON log files

use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_DIR: &str = "output/logs";

/// Used when `RUST_LOG` is unset. RPC transport crates log every request at
/// debug/info, so they are held at `warn`.
pub const DEFAULT_LOG_DIRECTIVES: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn,alloy_transport_http=warn,alloy_rpc_client=warn";

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Builds the filter from explicit directives, falling back to
/// [`DEFAULT_LOG_DIRECTIVES`].
pub fn log_filter(directives: Option<&str>) -> Result<EnvFilter> {
    Ok(EnvFilter::try_new(directives.unwrap_or(DEFAULT_LOG_DIRECTIVES))?)
}

pub fn setup_logging() -> Result<Arc<LoggingGuard>> {
    let file_appender = tracing_appender::rolling::hourly(LOG_DIR, "farm-metrics.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        // Target tells fetcher, multicall and runner lines apart
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_ansi(true)
                .with_level(true)
                .compact()
        )
        // One JSON object per event so farm fields can be grepped or parsed
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .json()
                .with_current_span(false)
                .with_span_list(false)
        )
        .with(log_filter(directives.as_deref())?)
        .init();

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories() -> Result<()> {
    std::fs::create_dir_all(LOG_DIR)?;
    Ok(())
}
