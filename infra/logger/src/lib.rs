//! # Logger
//!
//! Process-wide `tracing` setup for `PackHub` binaries: a compact console layer on stderr
//! (stdout stays free for command output), optional rolling log files with non-blocking
//! I/O, and `RUST_LOG`-style filtering.
//!
//! ## Example
//!
//! ```rust
//! # use packhub_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("packhub")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use packhub_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct Settings {
    console: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
    rejected_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            console: true,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
            rejected_level: None,
        }
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
#[must_use = "The builder must be initialized with .init()"]
pub struct LoggerBuilder {
    name: String,
    settings: Settings,
}

impl LoggerBuilder {
    /// Sets the logger name, also used as the log file prefix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Applies a [`LoggingConfig`] section.
    ///
    /// An unrecognized `level` falls back to `INFO`; the rejected value is reported as a
    /// warning once the subscriber is installed.
    pub fn from_config(mut self, config: &LoggingConfig) -> Self {
        match LevelFilter::from_str(config.level.trim()) {
            Ok(level) => self.settings.level = level,
            Err(_) => self.settings.rejected_level = Some(config.level.clone()),
        }
        self.settings.env_filter = config.filter.clone();
        self.settings.console = config.console;
        self.settings.path = config.directory.clone();
        self.settings.json = config.json;
        self.settings.max_files = config.max_files;
        self
    }

    /// Minimum level emitted when neither `RUST_LOG` nor [`Self::env_filter`] says otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Adds an explicit filter (e.g. `packhub_kernel=debug`).
    ///
    /// Invalid filters make [`LoggerBuilder::init`] return an error.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.settings.env_filter = Some(filter.into());
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Enables rolling file output into `path`.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings.path = Some(path.into());
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Writes file output as JSON lines.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.settings.json = enabled;
        self
    }

    /// Consumes the builder and installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] alive for the whole process: it owns the
    /// [`WorkerGuard`] that flushes file output on drop.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, `max_files == 0`, an
    ///   invalid filter, or no enabled output.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already installed.
    /// * [`LoggerError::Appender`] if the rolling file appender cannot be created.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate(&self.name, &self.settings)?;
        let filter = env_filter(&self.settings)?;

        let mut layers = Vec::new();

        if self.settings.console {
            layers.push(layer().compact().with_writer(std::io::stderr).boxed());
        }

        let guard = match &self.settings.path {
            Some(path) => {
                fs::create_dir_all(path).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create path: {}", path.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.settings.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.settings.max_files)
                    .build(path)
                    .context("Failed to build rolling appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.settings.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        if let Some(level) = &self.settings.rejected_level {
            tracing::warn!(level = %level, "Unknown log level, falling back to info");
        }

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background file writer; drop it only at shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a [`LoggerBuilder`] named `packhub` with console output at `INFO`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { name: "packhub".to_owned(), settings: Settings::default() }
    }

    /// Returns the file writer guard, if file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate(name: &str, settings: &Settings) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }
    if settings.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }
    Ok(())
}

fn env_filter(settings: &Settings) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    match &settings.env_filter {
        None => Ok(builder.from_env_lossy()),
        Some(filter) => builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{filter}': {e}").into(),
            context: None,
        }),
    }
}
