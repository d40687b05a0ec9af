/*!
 * Structured Tracing
 * Subscriber setup for the tracing events emitted at every OS boundary
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable enabling JSON output
pub const TRACE_JSON_ENV: &str = "DICOM_IO_TRACE_JSON";

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Tracing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// `EnvFilter` directives, e.g. `dicom_io=debug`
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            json: false,
        }
    }
}

impl TraceConfig {
    /// Read `RUST_LOG` and `DICOM_IO_TRACE_JSON`
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(TRACE_JSON_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, json: Option<String>) -> Self {
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            json: json.map(|v| v == "1" || v == "true").unwrap_or(false),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber described by `config`
///
/// Fails if a global subscriber is already set.
pub fn try_init_tracing(
    config: &TraceConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    if config.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()?;
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
        info!("Structured tracing initialized");
    }
    Ok(())
}

/// Initialize tracing from the environment
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - DICOM_IO_TRACE_JSON: Enable JSON output (default: false)
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing() {
    let _ = try_init_tracing(&TraceConfig::from_env());
}
