//! Tests for the property loader.
//!
//! Responsibilities:
//! - Test merge semantics across ordered locations.
//! - Test the override variable's abort-on-misconfiguration behavior.
//! - Test per-location parse failure recovery.
//!
//! Invariants:
//! - Tests touching environment variables use `serial_test` and uniquely
//!   named variables to prevent cross-test pollution.
//! - Temporary resource roots are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;

use tempfile::TempDir;


/// Build a temporary resource root holding the given files.
///
/// Paths are relative to the root; parent directories are created as needed.
pub fn resource_root(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp resource root");
    for (path, content) in files {
        let full = dir.path().join(path.trim_start_matches('/'));
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create resource parent dir");
        }
        fs::write(&full, content).expect("failed to write resource file");
    }
    dir
}

/// Write a file under `dir` and return its path as a string.
pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let full = dir.join(name);
    fs::write(&full, content).expect("failed to write file");
    full.to_string_lossy().into_owned()
}
