//! [`TestConfigDir`] builder for layered configuration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary instance directory plus an isolated global config directory.
///
/// # Example
///
/// ```rust,no_run
/// use form_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::new();
/// dir.write_instance("toml", "[labels]\ndataset = { \"metadata.title\" = \"Data\" }\n");
/// dir.assert_file_exists("deposit_form.toml");
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory with an empty `global/` subdirectory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("global")).unwrap();
        Self { temp_dir }
    }

    /// Instance directory, where `deposit_form.*` files live.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory standing in for `<config_dir>/deposit-form`.
    pub fn global_dir(&self) -> PathBuf {
        self.root().join("global")
    }

    /// Write `deposit_form.<extension>` in the instance directory.
    pub fn write_instance(&self, extension: &str, content: &str) -> PathBuf {
        self.write(&self.root().join(format!("deposit_form.{extension}")), content)
    }

    /// Write `deposit_form.local.<extension>` in the instance directory.
    pub fn write_local(&self, extension: &str, content: &str) -> PathBuf {
        self.write(
            &self.root().join(format!("deposit_form.local.{extension}")),
            content,
        )
    }

    /// Write `deposit_form.<extension>` in the global directory.
    pub fn write_global(&self, extension: &str, content: &str) -> PathBuf {
        self.write(&self.global_dir().join(format!("deposit_form.{extension}")), content)
    }

    fn write(&self, path: &Path, content: &str) -> PathBuf {
        fs::write(path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", path.display(), e));
        path.to_path_buf()
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
