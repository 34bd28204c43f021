//! The interval scanner: detect changed backing files and reload them.

use crate::registry::{ModuleLoader, ModuleProvider};
use crate::report::ReportSink;
use crate::scan::{FileStat, ScanOutcome, ScanStatus};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;

/// Scans the loaded-module set for backing files modified within a time
/// window and reloads each changed module in place.
///
/// The scanner is stateless between calls: the caller owns the watermark and
/// hands in consecutive `[from, to)` windows. One module's failure never
/// aborts the scan of the rest — every stat and load error is converted into
/// a per-module outcome and a report at the point it occurs.
///
/// # Examples
///
/// ```rust,no_run
/// use hotswap_modules::prelude::*;
/// use hotswap_modules::registry::{LoadedModule, StaticModuleProvider};
/// use std::sync::Arc;
/// use std::time::{Duration, SystemTime};
///
/// # fn example(loader: Arc<dyn hotswap_modules::registry::ModuleLoader>) {
/// let provider = Arc::new(StaticModuleProvider::new(vec![
///     LoadedModule::new("billing", "plugins/billing.so"),
/// ]));
///
/// let scanner = Scanner::new(provider, loader);
/// let now = SystemTime::now();
/// let outcomes = scanner.scan(now - Duration::from_secs(1), now);
/// for outcome in &outcomes {
///     println!("{}: {}", outcome.module(), outcome.status());
/// }
/// # }
/// ```
pub struct Scanner {
    provider: Arc<dyn ModuleProvider>,
    loader: Arc<dyn ModuleLoader>,
    stat: Arc<dyn FileStat>,
    reporter: Arc<dyn ReportSink>,
}

impl Scanner {
    /// Create a scanner over the given provider and loader.
    ///
    /// Stats files through [`SystemFileStat`](crate::scan::SystemFileStat)
    /// and reports through [`TracingSink`](crate::report::TracingSink) unless
    /// overridden with [`with_stat`](Self::with_stat) /
    /// [`with_reporter`](Self::with_reporter).
    pub fn new(provider: Arc<dyn ModuleProvider>, loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            provider,
            loader,
            stat: Arc::new(crate::scan::SystemFileStat),
            reporter: Arc::new(crate::report::TracingSink),
        }
    }

    /// Replace the file-stat collaborator.
    pub fn with_stat(mut self, stat: Arc<dyn FileStat>) -> Self {
        self.stat = stat;
        self
    }

    /// Replace the report sink.
    pub fn with_reporter(mut self, reporter: Arc<dyn ReportSink>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Scan all loaded modules against the half-open window `[from, to)`.
    ///
    /// Modules whose backing file was modified at `from` or later but strictly
    /// before `to` are evicted and loaded fresh; a file modified exactly at
    /// `to` is picked up by the next window. Modules without a backing file
    /// are skipped and produce no outcome. The caller must ensure
    /// `from <= to`.
    ///
    /// Stat and load calls are blocking and sequential, with no per-call
    /// timeout; a hung filesystem stalls the scan. Known limitation, kept
    /// deliberately — the loaded-module set is small and reload is a
    /// development-time event.
    pub fn scan(&self, from: SystemTime, to: SystemTime) -> Vec<ScanOutcome> {
        let mut outcomes = Vec::new();

        for module in self.provider.loaded_modules() {
            let Some(path) = module.path() else {
                continue;
            };

            let status = match self.stat.modified(path) {
                Ok(mtime) if from <= mtime && mtime < to => self.reload(module.name(), path),
                Ok(_) => ScanStatus::Unchanged,
                Err(err) if err.kind() == io::ErrorKind::NotFound => ScanStatus::Missing,
                Err(err) => {
                    self.reporter.error(&format!(
                        "Failed to stat {} for module {}: {}",
                        path.display(),
                        module.name(),
                        err
                    ));
                    ScanStatus::StatFailed(err.to_string())
                }
            };

            outcomes.push(ScanOutcome::new(module.name(), status));
        }

        outcomes
    }

    /// Evict the stale version and load fresh from disk.
    ///
    /// Eviction happens unconditionally before the load, so a failed load
    /// leaves the module unloaded rather than stale.
    fn reload(&self, name: &str, path: &Path) -> ScanStatus {
        self.loader.evict(name);

        match self.loader.load(name, path) {
            Ok(()) => {
                self.reporter.info(&format!("Reloaded module {}", name));
                ScanStatus::Reloaded
            }
            Err(err) => {
                self.reporter
                    .error(&format!("Failed to reload module {}: {}", name, err));
                ScanStatus::ReloadFailed(err.to_string())
            }
        }
    }
}
