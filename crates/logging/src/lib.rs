//! Reusable logging facade: named loggers configurable for console output,
//! size-rotated file output, or both, with adjustable severity thresholds and
//! template-driven formatting.
//!
//! The intended setup path is a [`LoggerConfig`] passed to [`Logger::new`], or
//! one of the factories ([`get_console_logger`], [`get_file_logger`],
//! [`get_full_logger`]) for the common cases. Applications that manage several
//! named loggers hold them in a [`LoggerRegistry`], where re-registering a
//! name replaces the previous logger's sinks instead of accumulating them.
//!
//! Logging calls are fire-and-forget: once a logger is constructed, write and
//! rotation failures are reported on the `tracing` diagnostic channel and
//! never propagate into application logic.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod config;
mod error;
pub mod format;
mod logger;
mod record;
mod registry;
mod severity;
mod sink;

pub use crate::config::LoggerConfig;
pub use crate::error::{Error, Result};
pub use crate::logger::{
    Logger, create_logger, get_console_logger, get_file_logger, get_full_logger,
};
pub use crate::record::{Callsite, LogRecord};
pub use crate::registry::LoggerRegistry;
pub use crate::severity::Severity;
pub use crate::sink::{ConsoleSink, RotatingFileSink, Sink};
