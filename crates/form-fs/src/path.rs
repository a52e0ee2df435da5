//! Normalized path handling for configuration files

use std::fmt;
use std::path::{Path, PathBuf};

/// A config file location with forward slashes only.
///
/// Layers are found by joining `<stem>.<ext>` onto a directory, and the
/// resulting path is what error messages and `check` print, so it reads
/// the same on every platform. Native paths are built only for I/O.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform-native form for filesystem calls.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a file name such as `deposit_form.toml`.
    pub fn join(&self, file_name: &str) -> Self {
        let file_name = file_name.replace('\\', "/");
        let inner = match self.inner.as_str() {
            "" => file_name,
            dir if dir.ends_with('/') => format!("{dir}{file_name}"),
            dir => format!("{dir}/{file_name}"),
        };
        Self { inner }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Text after the last `.` of the file name, which picks the config format.
    ///
    /// Dotfiles such as `.toml` have no extension.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of_local_config() {
        let path = NormalizedPath::new("instance/deposit_form.local.toml");
        assert_eq!(path.extension(), Some("toml"));
        assert_eq!(path.file_name(), Some("deposit_form.local.toml"));
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        assert_eq!(NormalizedPath::new("instance/.toml").extension(), None);
    }

    #[test]
    fn test_directory_has_no_file_extension() {
        assert_eq!(NormalizedPath::new("instance/").extension(), None);
    }
}
