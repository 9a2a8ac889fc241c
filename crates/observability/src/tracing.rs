//! Tracing/logging initialization.
//!
//! Logs always go to stderr so they never interleave with report output on
//! stdout. The filter comes from `RUST_LOG` (default `info`).

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log output format (`pretty` or `json`).
pub const LOG_FORMAT_VAR: &str = "STOCKLOG_LOG_FORMAT";

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Initialize tracing, reading the format from [`LOG_FORMAT_VAR`].
///
/// An unrecognized value falls back to [`LogFormat::Pretty`] and is reported
/// once the subscriber is installed.
pub fn init() {
    let requested = std::env::var(LOG_FORMAT_VAR).ok();
    let parsed = requested.as_deref().map(LogFormat::from_str);

    match parsed {
        Some(Ok(format)) => init_with(format),
        Some(Err(err)) => {
            init_with(LogFormat::default());
            ::tracing::warn!("{LOG_FORMAT_VAR}: {err}; using pretty output");
        }
        None => init_with(LogFormat::default()),
    }
}

/// Initialize tracing with an explicit format.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}
