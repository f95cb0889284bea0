//! Destinations for formatted log lines.

mod rotating_file;

pub use rotating_file::RotatingFileSink;

use std::io::Write;

use tracing::warn;

/// A destination that receives formatted log lines.
///
/// Writes are fire-and-forget: a sink must never propagate a transient write
/// failure back into application logic. Implementations report such failures
/// on the crate's own diagnostic channel and carry on.
pub trait Sink: Send + Sync {
    /// Writes one formatted line (without trailing newline) to the
    /// destination.
    fn write(&self, line: &str);
}

/// A sink that writes lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a new `ConsoleSink`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn write(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            warn!(error = %e, "failed to write log line to stdout");
        }
    }
}
