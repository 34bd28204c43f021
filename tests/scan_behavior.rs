//! Integration tests for scan detection over real files.

use hotswap_modules::prelude::*;
use hotswap_modules::registry::{LoadedModule, ModuleLoader, StaticModuleProvider};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingLoader {
    evictions: AtomicUsize,
    loads: Mutex<Vec<String>>,
}

impl ModuleLoader for RecordingLoader {
    fn evict(&self, _name: &str) {
        self.evictions.fetch_add(1, Ordering::SeqCst);
    }

    fn load(&self, name: &str, _path: &Path) -> std::result::Result<(), LoadError> {
        self.loads.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

fn scanner_over(dir: &TempDir, names: &[&str], loader: Arc<RecordingLoader>) -> Scanner {
    let modules = names
        .iter()
        .map(|name| LoadedModule::new(*name, dir.path().join(format!("{name}.so"))))
        .collect();
    Scanner::new(Arc::new(StaticModuleProvider::new(modules)), loader)
}

#[test]
fn test_fresh_write_is_detected_in_surrounding_window() {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RecordingLoader::default());
    let scanner = scanner_over(&temp_dir, &["billing"], Arc::clone(&loader));

    // Generous margins: filesystem mtimes can be coarser than the clock.
    let from = SystemTime::now() - Duration::from_secs(1);
    fs::write(temp_dir.path().join("billing.so"), b"v1").unwrap();
    let to = SystemTime::now() + Duration::from_secs(1);

    let outcomes = scanner.scan(from, to);
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_reloaded());
    assert_eq!(*loader.loads.lock().unwrap(), vec!["billing"]);
}

#[test]
fn test_old_file_is_outside_a_later_window() {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RecordingLoader::default());
    let scanner = scanner_over(&temp_dir, &["billing"], Arc::clone(&loader));

    fs::write(temp_dir.path().join("billing.so"), b"v1").unwrap();

    // A window starting well after the write sees the module as unchanged.
    let from = SystemTime::now() + Duration::from_secs(10);
    let to = from + Duration::from_secs(10);

    let outcomes = scanner.scan(from, to);
    assert_eq!(*outcomes[0].status(), ScanStatus::Unchanged);
    assert_eq!(loader.evictions.load(Ordering::SeqCst), 0);
}

#[test]
fn test_deleted_backing_file_reports_missing() {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RecordingLoader::default());
    let scanner = scanner_over(&temp_dir, &["billing"], Arc::clone(&loader));

    let path = temp_dir.path().join("billing.so");
    fs::write(&path, b"v1").unwrap();
    fs::remove_file(&path).unwrap();

    let now = SystemTime::now();
    let outcomes = scanner.scan(now - Duration::from_secs(1), now + Duration::from_secs(1));

    assert_eq!(*outcomes[0].status(), ScanStatus::Missing);
    // The in-memory module is untouched by absence.
    assert_eq!(loader.evictions.load(Ordering::SeqCst), 0);
    assert!(loader.loads.lock().unwrap().is_empty());
}

#[test]
fn test_only_changed_modules_are_reloaded() {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RecordingLoader::default());
    let scanner = scanner_over(&temp_dir, &["stale", "fresh"], Arc::clone(&loader));

    fs::write(temp_dir.path().join("stale.so"), b"v1").unwrap();

    // Let the stale module age out of the upcoming window.
    std::thread::sleep(Duration::from_millis(50));
    let from = SystemTime::now();
    std::thread::sleep(Duration::from_millis(50));
    fs::write(temp_dir.path().join("fresh.so"), b"v1").unwrap();
    let to = SystemTime::now() + Duration::from_secs(1);

    let outcomes = scanner.scan(from, to);
    let by_name = |name: &str| {
        outcomes
            .iter()
            .find(|o| o.module() == name)
            .unwrap()
            .status()
            .clone()
    };

    assert_eq!(by_name("stale"), ScanStatus::Unchanged);
    assert_eq!(by_name("fresh"), ScanStatus::Reloaded);
    assert_eq!(*loader.loads.lock().unwrap(), vec!["fresh"]);
}

#[test]
fn test_rescan_of_unmodified_file_is_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let loader = Arc::new(RecordingLoader::default());
    let scanner = scanner_over(&temp_dir, &["billing"], Arc::clone(&loader));

    let from = SystemTime::now() - Duration::from_secs(1);
    fs::write(temp_dir.path().join("billing.so"), b"v1").unwrap();
    let mid = SystemTime::now() + Duration::from_secs(1);

    let first = scanner.scan(from, mid);
    assert!(first[0].is_reloaded());

    // The next consecutive window no longer contains the write.
    let second = scanner.scan(mid, mid + Duration::from_secs(5));
    assert_eq!(*second[0].status(), ScanStatus::Unchanged);
    assert_eq!(loader.loads.lock().unwrap().len(), 1);
}
