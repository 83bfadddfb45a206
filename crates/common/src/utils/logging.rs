use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Request traces at info, the categories crates one level lower so
/// id assignment and store mutations show up without `RUST_LOG`.
pub const DEFAULT_FILTER: &str = "info,service=debug,server=debug,tower_http=info,axum=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON lines; anything else, or unset, is compact.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// `RUST_LOG` when it parses, [`DEFAULT_FILTER`] otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber on stdout. A second call is a no-op.
pub fn init_logging(format: LogFormat) {
    let builder = fmt().with_env_filter(env_filter()).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.with_target(false).compact().try_init(),
        LogFormat::Json => builder.with_target(true).json().try_init(),
    };
}

/// Pick the formatter from `LOG_FORMAT`.
pub fn init_logging_from_env() {
    let format = LogFormat::from_value(std::env::var("LOG_FORMAT").ok().as_deref());
    init_logging(format);
}
