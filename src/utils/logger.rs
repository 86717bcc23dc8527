use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter, letting `RUST_LOG` win over the configured level.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("seqassert={},warn", level)))
}

/// Installs the global subscriber. Later calls are ignored, so tests may
/// call this freely.
pub fn init_logger(level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(filter_for(level));

    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("logger already initialised");
    }
}
