//! The polling supervisor: timer ownership, watermark, start/stop lifecycle.

pub mod builder;
pub mod supervisor;

pub use builder::ModuleWatcherBuilder;
pub use supervisor::{DEFAULT_POLL_INTERVAL, ModuleWatcher};
