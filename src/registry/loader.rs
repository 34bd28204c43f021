//! Evict-and-load access to the host runtime's code table.

use crate::error::LoadError;
use std::path::Path;

/// Trait for replacing a loaded module with a fresh copy of its backing file.
///
/// The scanner drives this in two steps for every changed module: evict the
/// superseded in-memory version, then load fresh from disk. Eviction always
/// happens first, even though the subsequent load can fail — keeping two
/// versions resident at once is worse than a window with none. A failed load
/// therefore leaves the module unloaded until a later scan picks up a fixed
/// artifact; hosts that cannot tolerate that window should snapshot before
/// evicting, which this crate deliberately does not do on their behalf.
pub trait ModuleLoader: Send + Sync {
    /// Remove the module's current in-memory version from the runtime's
    /// code table.
    ///
    /// Must be idempotent: evicting a module that is not present is a no-op,
    /// not an error.
    fn evict(&self, name: &str);

    /// Load the module fresh from its backing file.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] describing why the artifact could not be
    /// loaded (unreadable, malformed, or rejected by the runtime).
    fn load(&self, name: &str, path: &Path) -> Result<(), LoadError>;
}
