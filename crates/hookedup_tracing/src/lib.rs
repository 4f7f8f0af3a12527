//! Tracing subscriber setup for hookedup.
//!
//! The list crate only emits `tracing` events: `debug` at compound operation
//! boundaries and `trace` for every applied, cancelled or stale step. This
//! crate provides [`TracingConfig`], which installs a subscriber to print them.
//!
//! # Example
//!
//! ```
//! use hookedup_tracing::{TracingConfig, TracingFormat};
//! use tracing::Level;
//!
//! // Development: compact output including every elementary step
//! let dev = TracingConfig::default()
//!     .with_level(Level::TRACE)
//!     .with_format(TracingFormat::Compact);
//!
//! // Production: JSON output, step noise filtered out
//! let prod = TracingConfig::default()
//!     .with_format(TracingFormat::Json)
//!     .with_env_filter("hookedup_list=debug,info");
//!
//! assert_eq!(dev.level(), Level::TRACE);
//! assert_eq!(prod.format(), TracingFormat::Json);
//! ```

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable colored output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output for log aggregation.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingInitError
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TracingInitError {
    /// The env-filter directive string could not be parsed.
    #[error("invalid tracing filter '{filter}': {source}")]
    InvalidFilter {
        /// The rejected directive string.
        filter: String,
        /// The parser error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Subscriber configuration.
///
/// # Fields
///
/// - `level` - Maximum level when no env filter is given
/// - `format` - Output format (Pretty, Compact, or Json)
/// - `env_filter` - Optional `target=level,...` directives
/// - `span_events` - Whether span enter/exit is printed
/// - `test_writer` - Route output through the test harness capture
#[derive(Debug, Clone)]
pub struct TracingConfig {
    level: Level,
    format: TracingFormat,
    env_filter: Option<String>,
    span_events: bool,
    test_writer: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
            test_writer: false,
        }
    }
}

impl TracingConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets a custom environment filter string.
    ///
    /// Format: `target=level,target=level,...`. Takes precedence over
    /// [`with_level`](Self::with_level).
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Writes through the test harness so output is captured per test.
    #[must_use]
    pub fn with_test_writer(mut self, enabled: bool) -> Self {
        self.test_writer = enabled;
        self
    }

    /// The configured maximum level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// The configured output format.
    #[must_use]
    pub fn format(&self) -> TracingFormat {
        self.format
    }

    /// The configured env filter, if any.
    #[must_use]
    pub fn env_filter(&self) -> Option<&str> {
        self.env_filter.as_deref()
    }

    /// Builds the filter this configuration describes.
    pub fn build_filter(&self) -> Result<EnvFilter, TracingInitError> {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).map_err(|source| TracingInitError::InvalidFilter {
                    filter: filter.clone(),
                    source,
                })
            }
            None => Ok(EnvFilter::new(self.level.as_str())),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Fails if the filter is invalid or a subscriber is already installed.
    pub fn init(&self) -> Result<(), TracingInitError> {
        let env_filter = self.build_filter()?;

        let span_events = if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        };

        let registry = tracing_subscriber::registry().with(env_filter);
        let layer = tracing_subscriber::fmt::layer().with_span_events(span_events);

        match (self.format, self.test_writer) {
            (TracingFormat::Pretty, false) => registry.with(layer.pretty()).try_init()?,
            (TracingFormat::Pretty, true) => registry
                .with(layer.pretty().with_test_writer())
                .try_init()?,
            (TracingFormat::Compact, false) => registry.with(layer.compact()).try_init()?,
            (TracingFormat::Compact, true) => registry
                .with(layer.compact().with_test_writer())
                .try_init()?,
            (TracingFormat::Json, false) => registry.with(layer.json()).try_init()?,
            (TracingFormat::Json, true) => registry
                .with(layer.json().with_test_writer())
                .try_init()?,
        }

        tracing::debug!(
            level = %self.level,
            format = ?self.format,
            "tracing initialized"
        );
        Ok(())
    }

    /// Installs the global subscriber unless one is already present.
    ///
    /// Returns `Ok(false)` when another subscriber won the race, which is the
    /// common case in test binaries.
    pub fn try_init(&self) -> Result<bool, TracingInitError> {
        match self.init() {
            Ok(()) => Ok(true),
            Err(TracingInitError::AlreadyInitialized(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }
}
