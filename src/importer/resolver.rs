//! Resolution of macro file names into lines.
//!
//! The expander never touches the filesystem itself. It asks a
//! [`FileResolver`] for the lines of each referenced file, which keeps the
//! expansion rules testable with in-memory fakes. Any
//! `Fn(&str) -> Result<Vec<String>>` closure is a resolver.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::{ImportError, Result};

/// Turns the file name of a macro into the lines of that file
pub trait FileResolver {
    /// Read the whole file named `file_name` with line terminators stripped.
    ///
    /// An empty file yields an empty vector.
    fn resolve(&self, file_name: &str) -> Result<Vec<String>>;
}

impl<F> FileResolver for F
where
    F: Fn(&str) -> Result<Vec<String>>,
{
    fn resolve(&self, file_name: &str) -> Result<Vec<String>> {
        self(file_name)
    }
}

/// Resolver reading import files relative to a base directory.
///
/// Absolute file names are used as given. No path restriction is applied:
/// templates are trusted build inputs.
#[derive(Debug, Clone)]
pub struct FileSystemResolver {
    base_dir: PathBuf,
}

impl FileSystemResolver {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolver rooted at the process working directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }
}

impl Default for FileSystemResolver {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl FileResolver for FileSystemResolver {
    fn resolve(&self, file_name: &str) -> Result<Vec<String>> {
        let path = self.path_for(file_name);
        let content =
            fs::read_to_string(&path).map_err(|e| ImportError::from_import_io(&path, e))?;
        let lines = split_lines(&content);
        debug!(path = %path.display(), lines = lines.len(), "Resolved import file");
        Ok(lines)
    }
}

/// Split file content into lines. `\n`, `\r\n` and a lone `\r` all end a line.
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}
