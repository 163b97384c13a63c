use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Flat-file store for the ledger. One entry per line, UTF-8, no header.
///
/// All I/O is a blocking whole-file read or write: `load` at startup,
/// `save` at the explicit save points (exit, clear). There is no append
/// mode; `save` always overwrites the previous state wholesale.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into a sequence of lines.
    /// A missing file is an empty ledger, not an error.
    pub fn load(&self) -> Result<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };

        Ok(contents.lines().map(str::to_string).collect())
    }

    /// Overwrite the backing file with the given lines, each newline-terminated.
    pub fn save(&self, lines: &[String]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }

        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}
