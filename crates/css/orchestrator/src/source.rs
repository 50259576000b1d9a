//! Byte sources for style sheet text.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the raw bytes of a style sheet by path.
///
/// Implementations must be shareable across threads; the factory calls `read` at most
/// once per successfully cached path.
pub trait StyleSource: Send + Sync {
    /// Read the sheet stored at `path`.
    ///
    /// # Errors
    /// Returns an error if the source does not exist or cannot be read.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Reads style sheets from the local file system.
#[derive(Clone, Debug, Default)]
pub struct FileSystemSource {
    base_dir: Option<PathBuf>,
}

impl FileSystemSource {
    #[inline]
    pub const fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Absolute paths are used as-is; relative ones are joined to the base directory.
    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base_dir {
            Some(base) if Path::new(path).is_relative() => base.join(path),
            _ => PathBuf::from(path),
        }
    }
}

impl StyleSource for FileSystemSource {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path)
            .with_context(|| format!("failed to read style sheet {}", full_path.display()))
    }
}

/// Decode sheet bytes as UTF-8, naming `source_path` on failure.
///
/// # Errors
/// Returns an error if the bytes are not valid UTF-8.
pub fn decode(bytes: Vec<u8>, source_path: &str) -> Result<String> {
    String::from_utf8(bytes)
        .with_context(|| format!("style sheet {source_path} is not valid UTF-8"))
}
