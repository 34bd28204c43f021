//! Interval scanning: which backing files changed, and reloading them.
//!
//! The scanner is the leaf of the crate: given a half-open time window and the
//! current loaded-module set, it stats every backing file, reloads the ones
//! whose modification time falls inside the window, and reports per-module
//! outcomes. It owns no timer and no state between calls — the supervisor in
//! [`crate::watch`] drives it with consecutive windows.

pub mod outcome;
pub mod scanner;
pub mod stat;

pub use outcome::{ScanOutcome, ScanStatus};
pub use scanner::Scanner;
pub use stat::{FileStat, SystemFileStat};
