use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
///
/// Call once at startup; installing a second subscriber panics.
pub fn init(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}
