//! Enumeration of currently loaded modules.

use std::path::{Path, PathBuf};

/// A currently loaded module as reported by the host runtime.
///
/// The `path` is the on-disk artifact the module was loaded from. Built-in or
/// synthetic modules have no backing file and carry `None`; the scanner skips
/// them entirely, since nothing on disk can supersede them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModule {
    name: String,
    path: Option<PathBuf>,
}

impl LoadedModule {
    /// Create a module entry backed by a file on disk.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// Create a module entry with no backing file (built-in / synthetic).
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    /// The module's name in the host runtime.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing file path, if the module has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Trait for enumerating the host's currently loaded modules.
///
/// Implement this against whatever registry the host runtime keeps. The watch
/// loop calls [`loaded_modules`](Self::loaded_modules) once per tick, so the
/// call must be cheap enough to repeat every poll interval; ordering across
/// calls need not be stable.
pub trait ModuleProvider: Send + Sync {
    /// Return all currently loaded modules.
    fn loaded_modules(&self) -> Vec<LoadedModule>;
}

/// A provider over a fixed, pre-declared module list.
///
/// Useful when the reloadable set is known up front (a plugin directory
/// enumerated at startup) rather than discovered from a live runtime registry.
///
/// # Examples
///
/// ```rust
/// use hotswap_modules::registry::{LoadedModule, ModuleProvider, StaticModuleProvider};
///
/// let provider = StaticModuleProvider::new(vec![
///     LoadedModule::new("billing", "plugins/billing.so"),
///     LoadedModule::builtin("core"),
/// ]);
/// assert_eq!(provider.loaded_modules().len(), 2);
/// ```
pub struct StaticModuleProvider {
    modules: Vec<LoadedModule>,
}

impl StaticModuleProvider {
    /// Create a provider over the given module list.
    pub fn new(modules: Vec<LoadedModule>) -> Self {
        Self { modules }
    }
}

impl ModuleProvider for StaticModuleProvider {
    fn loaded_modules(&self) -> Vec<LoadedModule> {
        self.modules.clone()
    }
}
