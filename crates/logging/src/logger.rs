use std::path::Path;

use crate::config::LoggerConfig;
use crate::error::Result;
use crate::format;
use crate::record::{Callsite, LogRecord};
use crate::severity::Severity;
use crate::sink::{ConsoleSink, RotatingFileSink, Sink};

/// A named logger holding a severity threshold and an ordered set of sinks.
///
/// Every leveled call builds a [`LogRecord`], drops it if its severity is
/// below the threshold, renders it through the configured template and fans
/// the line out to each sink in attachment order (console before file). The
/// threshold is applied once here, never per sink, so all sinks see identical
/// filtered records.
pub struct Logger {
    name: String,
    threshold: Severity,
    template: String,
    sinks: Vec<Box<dyn Sink>>,
}

impl Logger {
    /// Creates a new `Logger` from the given configuration.
    ///
    /// The console sink is attached first, then the rotating file sink when
    /// `file_output` is set and a path is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the log directory cannot be created or the log
    /// file cannot be opened.
    pub fn new(
        LoggerConfig {
            name,
            threshold,
            log_file,
            max_bytes,
            backup_count,
            format,
            console_output,
            file_output,
        }: LoggerConfig,
    ) -> Result<Self> {
        let mut sinks: Vec<Box<dyn Sink>> = Vec::with_capacity(2);

        if console_output {
            sinks.push(Box::new(ConsoleSink::new()));
        }
        if file_output {
            if let Some(path) = log_file {
                sinks.push(Box::new(RotatingFileSink::open(
                    path,
                    max_bytes,
                    backup_count,
                )?));
            }
        }

        Ok(Self::from_parts(name, threshold, format, sinks))
    }

    pub(crate) const fn from_parts(
        name: String,
        threshold: Severity,
        template: String,
        sinks: Vec<Box<dyn Sink>>,
    ) -> Self {
        Self {
            name,
            threshold,
            template,
            sinks,
        }
    }

    /// Returns the logger's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the configured severity threshold.
    #[must_use]
    pub const fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Returns the number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Logs a message at the given severity.
    pub fn log(&self, severity: Severity, message: &str) {
        self.dispatch(severity, message, None);
    }

    /// Logs a message at the given severity with call-site metadata, usually
    /// captured via [`callsite!`](crate::callsite).
    pub fn log_at(&self, severity: Severity, message: &str, callsite: Callsite) {
        self.dispatch(severity, message, Some(callsite));
    }

    /// Logs a message at [`Severity::Debug`].
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Logs a message at [`Severity::Info`].
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Logs a message at [`Severity::Warning`].
    pub fn warning(&self, message: &str) {
        self.log(Severity::Warning, message);
    }

    /// Logs a message at [`Severity::Error`].
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Logs a message at [`Severity::Critical`].
    pub fn critical(&self, message: &str) {
        self.log(Severity::Critical, message);
    }

    /// Logs a message at [`Severity::Error`], appending the given error and
    /// its source chain.
    pub fn exception(&self, message: &str, error: &(dyn std::error::Error + 'static)) {
        let mut rendered = format!("{message}: {error}");
        let mut source = error.source();
        while let Some(cause) = source {
            rendered.push_str(&format!("; caused by: {cause}"));
            source = cause.source();
        }
        self.log(Severity::Error, &rendered);
    }

    fn dispatch(&self, severity: Severity, message: &str, callsite: Option<Callsite>) {
        if severity < self.threshold {
            return;
        }

        let record = LogRecord::new(&self.name, severity, message, callsite);
        let line = format::render(&self.template, &record);
        for sink in &self.sinks {
            sink.write(&line);
        }
    }
}

/// Creates a logger from an explicit configuration.
///
/// Thin alias for [`Logger::new`], kept for parity with the `get_*_logger`
/// factories.
///
/// # Errors
///
/// Returns an error if the file sink cannot be constructed.
pub fn create_logger(config: LoggerConfig) -> Result<Logger> {
    Logger::new(config)
}

/// Creates a logger that writes to the console only.
///
/// `level` is a severity name looked up leniently; unrecognized names fall
/// back to `INFO`.
///
/// # Errors
///
/// Never fails in practice (no file sink is constructed); returns `Result`
/// for uniformity with the other factories.
pub fn get_console_logger(name: &str, level: &str) -> Result<Logger> {
    Logger::new(LoggerConfig {
        name: name.to_string(),
        threshold: Severity::from_name(level),
        console_output: true,
        file_output: false,
        ..Default::default()
    })
}

/// Creates a logger that writes to a rotating file only.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be opened.
pub fn get_file_logger(name: &str, log_file: impl AsRef<Path>, level: &str) -> Result<Logger> {
    Logger::new(LoggerConfig {
        name: name.to_string(),
        threshold: Severity::from_name(level),
        log_file: Some(log_file.as_ref().to_path_buf()),
        console_output: false,
        file_output: true,
        ..Default::default()
    })
}

/// Creates a logger that writes to both the console and a rotating file.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be opened.
pub fn get_full_logger(name: &str, log_file: impl AsRef<Path>, level: &str) -> Result<Logger> {
    Logger::new(LoggerConfig {
        name: name.to_string(),
        threshold: Severity::from_name(level),
        log_file: Some(log_file.as_ref().to_path_buf()),
        console_output: true,
        file_output: true,
        ..Default::default()
    })
}
