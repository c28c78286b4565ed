//! Candidate directories for the city CSV files.

use std::path::{Path, PathBuf};

/// Where to look for a dataset: one primary directory and at most one fallback.
///
/// The primary directory defaults to the current working directory. The
/// fallback is the directory holding the running executable, so the explorer
/// also works when launched from elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLocations {
    primary: PathBuf,
    fallback: Option<PathBuf>,
}

impl DataLocations {
    /// Primary lookup relative to the current working directory.
    pub fn current_dir() -> Self {
        Self::new(PathBuf::new())
    }

    /// Explicit primary directory, executable directory as fallback.
    pub fn new(primary: impl Into<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            fallback: program_dir(),
        }
    }

    /// Replace the fallback directory.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Option<PathBuf>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Path tried first.
    pub fn primary_path(&self, file_name: &str) -> PathBuf {
        self.primary.join(file_name)
    }

    /// Path tried once after the primary path fails.
    pub fn fallback_path(&self, file_name: &str) -> Option<PathBuf> {
        self.fallback.as_deref().map(|dir| dir.join(file_name))
    }
}

impl Default for DataLocations {
    fn default() -> Self {
        Self::current_dir()
    }
}

/// Directory containing the running executable, if it can be determined.
pub fn program_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}
