//! Scratch bundle directories for tests that need their own files

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Temporary directory holding bundle files written by a test
pub struct BundleDir {
    pub temp_dir: tempfile::TempDir,
}

impl BundleDir {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Write `content` to `file_name` and return its path
    pub fn write(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(file_name);
        fs::write(&path, content).expect("Failed to write bundle file");
        path
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
