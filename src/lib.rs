//! # hotswap-modules
//!
//! Live reload for a running process's loaded code modules, driven by mtime
//! polling.
//!
//! ## Overview
//!
//! `hotswap-modules` keeps a development process fresh without restarts:
//! - A supervisor loop ticks on a fixed interval and owns a time watermark
//! - Each tick scans the half-open window `[last, now)` for changed backing
//!   files and advances the watermark
//! - Changed modules are evicted and loaded fresh, one at a time, with
//!   per-module fault isolation — one bad module never aborts the scan
//!
//! The crate owns only the detection-and-reload loop. What counts as a
//! "loaded module", how one is evicted and loaded, and where reports go are
//! all injected collaborators ([`registry::ModuleProvider`],
//! [`registry::ModuleLoader`], [`report::ReportSink`]), so the loop is
//! independent of any specific runtime's code-loading mechanism.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotswap_modules::prelude::*;
//! use hotswap_modules::registry::{LoadedModule, StaticModuleProvider};
//! use std::sync::Arc;
//!
//! # fn example(loader: Arc<dyn hotswap_modules::registry::ModuleLoader>) -> Result<()> {
//! let watcher = ModuleWatcher::builder()
//!     .with_provider(Arc::new(StaticModuleProvider::new(vec![
//!         LoadedModule::new("billing", "plugins/billing.so"),
//!     ])))
//!     .with_loader(loader)
//!     .build()?;
//!
//! watcher.start()?;
//! // Edit plugins/billing.so; within a poll interval it is reloaded in place.
//! # Ok(())
//! # }
//! ```
//!
//! ## Semantics worth knowing
//!
//! - **At-most-once detection**: the watermark advances every tick even when a
//!   scan reports failures; a change is acted on once, and a failed reload is
//!   retried only when the file changes again.
//! - **Failed reloads leave the module unloaded**: eviction happens before
//!   the load attempt, so a malformed artifact unloads the module until a
//!   fixed artifact is picked up by a later scan.
//! - **Nothing is detected while stopped**: the watermark resets to "now" on
//!   every start.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod registry;
pub mod report;
pub mod scan;
pub mod watch;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{LoadError, Result, WatchError};
    pub use crate::scan::{ScanOutcome, ScanStatus, Scanner};
    pub use crate::watch::{ModuleWatcher, ModuleWatcherBuilder};
}
