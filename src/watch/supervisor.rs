//! The supervisor loop driving periodic scans.

use crate::error::{Result, WatchError};
use crate::report::ReportSink;
use crate::scan::Scanner;
use crate::watch::ModuleWatcherBuilder;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};

/// Default poll interval between scans.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A polling watcher that periodically reloads modules whose backing files
/// changed on disk.
///
/// The watcher owns a recurring timer and a time watermark. On each tick it
/// scans the window between the previous watermark and "now", reloads every
/// module whose backing file changed inside that window, then advances the
/// watermark — consecutive windows are gap-free and non-overlapping, so every
/// file change is detected at most once.
///
/// The watermark resets to "now" on every [`start`](Self::start): changes made
/// while the watcher was stopped are never retroactively detected.
///
/// # Examples
///
/// ```rust,no_run
/// use hotswap_modules::prelude::*;
/// use hotswap_modules::registry::{LoadedModule, StaticModuleProvider};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example(loader: Arc<dyn hotswap_modules::registry::ModuleLoader>) -> Result<()> {
/// let watcher = ModuleWatcher::builder()
///     .with_provider(Arc::new(StaticModuleProvider::new(vec![
///         LoadedModule::new("billing", "plugins/billing.so"),
///     ])))
///     .with_loader(loader)
///     .with_poll_interval(Duration::from_secs(1))
///     .build()?;
///
/// watcher.start()?;
/// // ... develop, save, modules reload in place ...
/// watcher.stop()?;
/// # Ok(())
/// # }
/// ```
pub struct ModuleWatcher {
    scanner: Arc<Scanner>,
    reporter: Arc<dyn ReportSink>,
    poll_interval: Duration,
    state: Mutex<WatchState>,
}

enum WatchState {
    Stopped,
    Running { shutdown: watch::Sender<bool> },
}

impl ModuleWatcher {
    /// Create a builder for a `ModuleWatcher`.
    pub fn builder() -> ModuleWatcherBuilder {
        ModuleWatcherBuilder::new()
    }

    pub(crate) fn from_parts(
        scanner: Scanner,
        reporter: Arc<dyn ReportSink>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            scanner: Arc::new(scanner),
            reporter,
            poll_interval,
            state: Mutex::new(WatchState::Stopped),
        }
    }

    /// Start the polling loop.
    ///
    /// Captures the watermark as the current time and spawns a task that
    /// scans once per poll interval. Ticks are processed strictly
    /// sequentially: a slow scan delays the next tick, it never overlaps it,
    /// and the watermark is only advanced after a scan returns. The watermark
    /// advances even when a scan reports failures — a change is detected at
    /// most once, with no retry storms.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::AlreadyRunning`] if the loop is already running.
    pub fn start(&self) -> Result<()> {
        let mut state = self.state.lock();
        if matches!(*state, WatchState::Running { .. }) {
            return Err(WatchError::AlreadyRunning);
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let last = SystemTime::now();
        tokio::spawn(run_loop(
            Arc::clone(&self.scanner),
            self.poll_interval,
            last,
            shutdown_rx,
        ));

        *state = WatchState::Running {
            shutdown: shutdown_tx,
        };
        Ok(())
    }

    /// Stop the polling loop.
    ///
    /// Only prevents future scans from starting; a scan already in flight
    /// runs every module to completion. Stopping releases the timer — a
    /// later [`start`](Self::start) begins with a fresh watermark.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::NotRunning`] if the loop is not running; the
    /// misuse is also pushed to the report sink.
    pub fn stop(&self) -> Result<()> {
        let mut state = self.state.lock();
        match std::mem::replace(&mut *state, WatchState::Stopped) {
            WatchState::Running { shutdown } => {
                let _ = shutdown.send(true);
                Ok(())
            }
            WatchState::Stopped => {
                self.reporter
                    .error("Stop requested but the watch loop is not running");
                Err(WatchError::NotRunning)
            }
        }
    }

    /// Whether the polling loop is currently running.
    pub fn is_running(&self) -> bool {
        matches!(*self.state.lock(), WatchState::Running { .. })
    }

    /// The poll interval this watcher was built with.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Drop for ModuleWatcher {
    fn drop(&mut self) {
        // Dropping the shutdown sender ends the spawned loop.
        *self.state.get_mut() = WatchState::Stopped;
    }
}

/// The single sequential actor: tick, scan `[last, now)`, advance `last`.
async fn run_loop(
    scanner: Arc<Scanner>,
    poll_interval: Duration,
    mut last: SystemTime,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    let mut ticker = interval(poll_interval);
    // A tick delayed by a slow scan is queued, not stacked or pre-empted.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval fires immediately; consume it so the
    // first scan window spans a full poll interval.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = SystemTime::now();
                let _outcomes = scanner.scan(last, now);
                last = now;
            }
            // Fires on stop() and when the watcher itself is dropped.
            _ = shutdown_rx.changed() => break,
        }
    }
}
