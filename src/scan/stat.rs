//! Filesystem metadata access behind a seam.

use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Trait for querying a backing file's modification time.
///
/// The scanner distinguishes "file gone" from every other failure by the
/// returned error's [`io::ErrorKind::NotFound`]; implementations should
/// preserve that kind when the file is absent.
pub trait FileStat: Send + Sync {
    /// Return the file's last modification time.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] with kind [`io::ErrorKind::NotFound`] if the
    /// file does not exist, or another kind for permission and I/O failures.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
}

/// [`FileStat`] implementation backed by [`std::fs::metadata`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileStat;

impl FileStat for SystemFileStat {
    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_modified_of_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("unit.so");
        fs::write(&path, b"artifact").unwrap();

        let before = SystemTime::now();
        let mtime = SystemFileStat.modified(&path).unwrap();
        // Filesystem timestamps can be coarser than the system clock.
        assert!(mtime <= SystemTime::now());
        assert!(
            before.duration_since(mtime).unwrap_or_default()
                < std::time::Duration::from_secs(5)
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone.so");

        let err = SystemFileStat.modified(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
