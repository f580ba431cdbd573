//! Structured logging configuration for SwipeTile

use std::str::FromStr;

use tracing::info;
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: LogLevel,
    /// Log format (json, pretty, compact)
    pub format: LogFormat,
    /// Output destination (stdout, file)
    pub output: LogOutput,
    /// File path for file output
    pub file_path: Option<String>,
    /// Include source file and line numbers
    pub include_source: bool,
    /// Include thread names
    pub include_thread_names: bool,
}

/// Supported log levels
#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log output formats
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    /// Human-readable format for development
    Pretty,
    /// Compact format for production
    Compact,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Log output destinations
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutput {
    Stdout,
    File,
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(LogOutput::Stdout),
            "file" => Ok(LogOutput::File),
            _ => Err(format!("Invalid log output: {}", s)),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            output: LogOutput::Stdout,
            file_path: None,
            include_source: false,
            include_thread_names: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(level) = std::env::var("SWIPETILE_LOG_LEVEL") {
            if let Ok(parsed) = LogLevel::from_str(&level) {
                config.level = parsed;
            }
        }

        if let Ok(format) = std::env::var("SWIPETILE_LOG_FORMAT") {
            if let Ok(parsed) = LogFormat::from_str(&format) {
                config.format = parsed;
            }
        }

        if let Ok(output) = std::env::var("SWIPETILE_LOG_OUTPUT") {
            if let Ok(parsed) = LogOutput::from_str(&output) {
                config.output = parsed;
            }
        }

        if let Ok(file_path) = std::env::var("SWIPETILE_LOG_FILE") {
            config.file_path = Some(file_path);
        }

        if let Ok(include_source) = std::env::var("SWIPETILE_LOG_SOURCE") {
            config.include_source = include_source.to_lowercase() == "true";
        }

        config
    }
}

/// Initialize the global tracing subscriber with the given configuration
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = create_filter(config);

    match (&config.output, &config.file_path) {
        (LogOutput::Stdout, _) => {
            let layer = create_stdout_layer(config);
            tracing_subscriber::registry()
                .with(layer.with_filter(filter))
                .init();
        }
        (LogOutput::File, Some(file_path)) => {
            let layer = create_file_layer(config, file_path)?;
            tracing_subscriber::registry()
                .with(layer.with_filter(filter))
                .init();
        }
        (LogOutput::File, None) => {
            return Err("File path required for file output".into());
        }
    }

    info!("Logging initialized with config: {:?}", config);
    Ok(())
}

/// Create an environment filter based on the configuration
fn create_filter(config: &LogConfig) -> EnvFilter {
    let base_level = match config.level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };

    let filter_str = format!("swipetile={}", base_level);

    // Allow environment override
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str))
}

/// Create a stdout logging layer
fn create_stdout_layer(
    config: &LogConfig,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync> {
    match config.format {
        LogFormat::Pretty => Box::new(
            fmt::layer()
                .pretty()
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ),
        LogFormat::Compact => Box::new(
            fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ),
        LogFormat::Json => Box::new(
            fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ),
    }
}

/// Create a file logging layer
fn create_file_layer(
    config: &LogConfig,
    file_path: &str,
) -> Result<Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>, Box<dyn std::error::Error>>
{
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;

    let layer = match config.format {
        LogFormat::Pretty => Box::new(
            fmt::layer()
                .pretty()
                .with_writer(file)
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ) as Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>,
        LogFormat::Compact => Box::new(
            fmt::layer()
                .compact()
                .with_writer(file)
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ),
        LogFormat::Json => Box::new(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_timer(UtcTime::rfc_3339())
                .with_thread_names(config.include_thread_names)
                .with_file(config.include_source)
                .with_line_number(config.include_source),
        ),
    };

    Ok(layer)
}
