//! The host runtime's view of its loaded modules.
//!
//! Enumeration and load/evict are seams into the host process: the watch loop
//! never owns a module registry of its own, it only asks an injected
//! [`ModuleProvider`] what is loaded and drives an injected [`ModuleLoader`]
//! when a backing file changes.

pub mod loader;
pub mod provider;

pub use loader::ModuleLoader;
pub use provider::{LoadedModule, ModuleProvider, StaticModuleProvider};
