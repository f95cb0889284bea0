use chrono::{DateTime, Local};

use crate::severity::Severity;

/// Call-site metadata attached to a [`LogRecord`].
///
/// Usually produced via the [`callsite!`](crate::callsite) macro rather than
/// constructed by hand.
#[derive(Clone, Copy, Debug)]
pub struct Callsite {
    /// Module path of the call site.
    pub module: &'static str,
    /// Source file of the call site.
    pub file: &'static str,
    /// Line number of the call site.
    pub line: u32,
}

/// Captures the call site of the current expression as a [`Callsite`].
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::Callsite {
            module: module_path!(),
            file: file!(),
            line: line!(),
        }
    };
}

/// A single log event, created per call and discarded after rendering.
#[derive(Debug)]
pub struct LogRecord<'a> {
    /// Local time at which the record was created.
    pub timestamp: DateTime<Local>,
    /// Name of the logger that produced the record.
    pub name: &'a str,
    /// Severity of the record.
    pub severity: Severity,
    /// The raw message.
    pub message: &'a str,
    /// Call-site metadata, when captured by the caller.
    pub callsite: Option<Callsite>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record timestamped now.
    #[must_use]
    pub fn new(
        name: &'a str,
        severity: Severity,
        message: &'a str,
        callsite: Option<Callsite>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            name,
            severity,
            message,
            callsite,
        }
    }
}
