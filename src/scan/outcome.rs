//! Per-module scan outcomes.

use std::fmt;

/// What happened to one module during one scan.
///
/// Outcomes exist for observability and tests; they are returned from
/// [`Scanner::scan`](crate::scan::Scanner::scan) and never persisted. The
/// supervisor loop discards them after the scan — the report sink has already
/// seen every notable event by then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    module: String,
    status: ScanStatus,
}

impl ScanOutcome {
    /// Create an outcome for the named module.
    pub fn new(module: impl Into<String>, status: ScanStatus) -> Self {
        Self {
            module: module.into(),
            status,
        }
    }

    /// Name of the module this outcome describes.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// The per-module status.
    pub fn status(&self) -> &ScanStatus {
        &self.status
    }

    /// Whether the module was successfully reloaded in this scan.
    pub fn is_reloaded(&self) -> bool {
        matches!(self.status, ScanStatus::Reloaded)
    }
}

/// Status of one module after one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// The backing file changed within the scan window and the module was
    /// evicted and loaded fresh.
    Reloaded,

    /// The backing file's modification time fell outside the scan window.
    Unchanged,

    /// The backing file no longer exists. The in-memory module is left
    /// untouched; absence alone never triggers eviction.
    Missing,

    /// The backing file could not be statted for a reason other than absence
    /// (permissions, I/O).
    StatFailed(String),

    /// The backing file changed, the stale version was evicted, and the fresh
    /// load failed. The module is unloaded until a later scan succeeds.
    ReloadFailed(String),
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reloaded => write!(f, "reloaded"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Missing => write!(f, "missing"),
            Self::StatFailed(reason) => write!(f, "stat failed: {}", reason),
            Self::ReloadFailed(reason) => write!(f, "reload failed: {}", reason),
        }
    }
}
