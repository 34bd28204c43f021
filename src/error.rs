//! Error types for hotswap-modules.

/// Result type alias for hotswap-modules operations.
pub type Result<T> = std::result::Result<T, WatchError>;

/// Errors that can occur when controlling the watch loop.
///
/// Everything that happens *inside* a scan (missing files, stat failures,
/// failed reloads) is deliberately not represented here: per-unit problems are
/// converted into [`ScanStatus`](crate::scan::ScanStatus) values and reports at
/// the smallest possible scope and never terminate the loop. `WatchError` only
/// covers the control surface itself.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    /// `start()` was called while the watch loop was already running.
    #[error("Watch loop is already running")]
    AlreadyRunning,

    /// `stop()` was called while the watch loop was not running.
    ///
    /// Cancelling a timer that isn't armed is reported, not a crash.
    #[error("Watch loop is not running")]
    NotRunning,

    /// The builder was finalized without a required collaborator.
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),
}

/// Structured failure reason returned by [`ModuleLoader::load`].
///
/// A load failure is surfaced through the report sink and recorded as a
/// [`ScanStatus::ReloadFailed`](crate::scan::ScanStatus) outcome; by that point
/// the stale version has already been evicted, so the module stays unloaded
/// until its backing file is fixed and picked up by a later scan.
///
/// [`ModuleLoader::load`]: crate::registry::ModuleLoader::load
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The backing file could not be read.
    #[error("Failed to read module artifact: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file was read but is not a usable artifact.
    #[error("Module artifact is malformed: {0}")]
    Malformed(String),

    /// The runtime rejected the module for a reason of its own.
    #[error("Module load rejected: {0}")]
    Rejected(String),
}

impl LoadError {
    /// Create a malformed-artifact error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create a rejected-load error.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
