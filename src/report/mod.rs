//! Reporting of scan and lifecycle events.
//!
//! The watch loop is fire-and-forget: nothing consumes a per-tick return
//! value, so every notable event (reload success, reload failure, stat error,
//! misuse of the control surface) is pushed into a [`ReportSink`]. How
//! reports are displayed or stored is the host's business — the default
//! [`TracingSink`] hands them to whatever `tracing` subscriber the host has
//! installed.

/// Sink for informational and error-level text reports.
pub trait ReportSink: Send + Sync {
    /// Emit an informational report (e.g. a successful reload).
    fn info(&self, message: &str);

    /// Emit an error report (e.g. a failed reload or stat error).
    fn error(&self, message: &str);
}

/// [`ReportSink`] implementation forwarding to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
