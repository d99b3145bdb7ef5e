use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// A file gitig seeds with fixed content and never overwrites.
pub trait GeneratedFile {
    /// Location of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn render(&self) -> String;

    /// Create the file with the rendered content unless it already exists.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteResult::Skipped),
            Err(e) => return Err(Error::io(&path, e)),
        };
        file.write_all(self.render().as_bytes())
            .map_err(|e| Error::io(&path, e))?;
        Ok(WriteResult::Written)
    }
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was created
    Written,
    /// File already existed and was left alone
    Skipped,
}
