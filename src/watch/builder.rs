//! Builder for constructing ModuleWatcher instances.

use crate::error::{Result, WatchError};
use crate::registry::{ModuleLoader, ModuleProvider};
use crate::report::{ReportSink, TracingSink};
use crate::scan::{FileStat, Scanner, SystemFileStat};
use crate::watch::supervisor::DEFAULT_POLL_INTERVAL;
use crate::watch::ModuleWatcher;
use std::sync::Arc;
use std::time::Duration;

/// Builder for constructing a [`ModuleWatcher`].
///
/// A provider and a loader are required; the stat collaborator, report sink,
/// and poll interval have defaults ([`SystemFileStat`], [`TracingSink`],
/// 1 second).
///
/// # Examples
///
/// ```rust,no_run
/// use hotswap_modules::prelude::*;
/// use hotswap_modules::registry::{LoadedModule, StaticModuleProvider};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # fn example(loader: Arc<dyn hotswap_modules::registry::ModuleLoader>) -> Result<()> {
/// let watcher = ModuleWatcher::builder()
///     .with_provider(Arc::new(StaticModuleProvider::new(vec![
///         LoadedModule::new("billing", "plugins/billing.so"),
///     ])))
///     .with_loader(loader)
///     .with_poll_interval(Duration::from_millis(500))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ModuleWatcherBuilder {
    provider: Option<Arc<dyn ModuleProvider>>,
    loader: Option<Arc<dyn ModuleLoader>>,
    stat: Option<Arc<dyn FileStat>>,
    reporter: Option<Arc<dyn ReportSink>>,
    poll_interval: Duration,
}

impl ModuleWatcherBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            provider: None,
            loader: None,
            stat: None,
            reporter: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the collaborator that enumerates currently loaded modules.
    pub fn with_provider(mut self, provider: Arc<dyn ModuleProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the collaborator that evicts and loads modules.
    pub fn with_loader(mut self, loader: Arc<dyn ModuleLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Replace the file-stat collaborator (defaults to [`SystemFileStat`]).
    pub fn with_stat(mut self, stat: Arc<dyn FileStat>) -> Self {
        self.stat = Some(stat);
        self
    }

    /// Replace the report sink (defaults to [`TracingSink`]).
    pub fn with_reporter(mut self, reporter: Arc<dyn ReportSink>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Set the poll interval between scans (defaults to 1 second).
    ///
    /// Fixed for the life of the loop; there is no way to change it after
    /// construction.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Build the watcher.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::MissingCollaborator`] if no provider or no
    /// loader was supplied.
    pub fn build(self) -> Result<ModuleWatcher> {
        let provider = self
            .provider
            .ok_or(WatchError::MissingCollaborator("provider"))?;
        let loader = self.loader.ok_or(WatchError::MissingCollaborator("loader"))?;
        let stat = self.stat.unwrap_or_else(|| Arc::new(SystemFileStat));
        let reporter = self.reporter.unwrap_or_else(|| Arc::new(TracingSink));

        let scanner = Scanner::new(provider, loader)
            .with_stat(stat)
            .with_reporter(Arc::clone(&reporter));

        Ok(ModuleWatcher::from_parts(
            scanner,
            reporter,
            self.poll_interval,
        ))
    }
}

impl Default for ModuleWatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
