//! Logging infrastructure for msgfmt.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    fmt::{
        self,
        format::{DefaultFields, FmtSpan, Format, Full},
        time::FormatTime,
        MakeWriter,
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Environment variables read by [`LogConfig::from_env`].
pub mod vars {
    pub const MSGFMT_LOG_LEVEL: &str = "MSGFMT_LOG_LEVEL";
    pub const MSGFMT_LOG_FORMAT: &str = "MSGFMT_LOG_FORMAT";
    pub const MSGFMT_LOG_FILE: &str = "MSGFMT_LOG_FILE";
    pub const MSGFMT_LOG_SOURCE: &str = "MSGFMT_LOG_SOURCE";
    pub const MSGFMT_LOG_SPANS: &str = "MSGFMT_LOG_SPANS";
    pub const RUST_LOG: &str = "RUST_LOG";
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log file path (if file logging enabled).
    pub file_path: Option<PathBuf>,
    /// Include timestamps.
    pub timestamps: bool,
    /// Include source location.
    pub source_location: bool,
    /// Include span events.
    pub span_events: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        }
    }
}

impl LogLevel {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive string understood by `EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl LogFormat {
    /// Parse from string, falling back to pretty output.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            file_path: None,
            timestamps: true,
            source_location: false,
            span_events: false,
        }
    }
}

fn flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        let level = std::env::var(vars::MSGFMT_LOG_LEVEL)
            .or_else(|_| std::env::var(vars::RUST_LOG));
        if let Some(l) = level.ok().as_deref().and_then(LogLevel::parse) {
            config.level = l;
        }

        if let Ok(format) = std::env::var(vars::MSGFMT_LOG_FORMAT) {
            config.format = LogFormat::parse(&format);
        }

        if let Ok(file_path) = std::env::var(vars::MSGFMT_LOG_FILE) {
            config.file_path = Some(PathBuf::from(file_path));
        }

        if let Ok(source_location) = std::env::var(vars::MSGFMT_LOG_SOURCE) {
            config.source_location = flag(&source_location);
        }

        if let Ok(span_events) = std::env::var(vars::MSGFMT_LOG_SPANS) {
            config.span_events = flag(&span_events);
        }

        config
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Build one fmt layer for the configured format.
    fn layer<W>(&self, writer: W, ansi: bool) -> BoxedLayer
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let base = fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .with_span_events(self.span_events());

        if self.timestamps {
            self.formatted(base)
        } else {
            self.formatted(base.without_time())
        }
    }

    fn formatted<T, W>(
        &self,
        base: fmt::Layer<Registry, DefaultFields, Format<Full, T>, W>,
    ) -> BoxedLayer
    where
        T: FormatTime + Send + Sync + 'static,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        match self.format {
            LogFormat::Pretty => base
                .with_target(true)
                .with_file(self.source_location)
                .with_line_number(self.source_location)
                .boxed(),
            LogFormat::Compact => base.compact().boxed(),
            LogFormat::Json => base.json().boxed(),
        }
    }
}

/// Initialize logging with the given configuration.
///
/// Output always goes to stderr; a configured `file_path` gets a second,
/// non-ANSI copy. `RUST_LOG` directives take precedence over `level`.
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let mut layers = vec![config.layer(io::stderr, true)];

    if let Some(file_path) = &config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        layers.push(config.layer(Mutex::new(file), false));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LogError::InitError(e.to_string()))?;

    Ok(())
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    InitError(String),

    #[error("failed to open log file: {0}")]
    FileError(#[from] io::Error),
}

/// Convenience macros re-exported from tracing.
pub use tracing::{debug, error, info, trace, warn};

/// Span and timing helpers for formatting operations.
pub mod spans;
