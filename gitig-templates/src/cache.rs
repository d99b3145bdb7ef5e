//! On-disk cache of downloaded templates.
//!
//! One `<name>.cache` file per template holding the raw body. An entry is
//! valid for the configured duration measured from its modification time;
//! expired entries are deleted when they are looked up.

use std::{
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use gitig_core::{Error, Result, Settings};

use crate::source::is_plain_name;

const EXTENSION: &str = "cache";

#[derive(Debug, Clone)]
pub struct TemplateCache {
    dir: PathBuf,
    ttl: Duration,
    enabled: bool,
}

impl TemplateCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            enabled: true,
        }
    }

    /// Cache configured from user settings.
    pub fn from_settings(dir: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self::new(dir, settings.cache_duration).enabled(settings.cache_enabled)
    }

    /// A disabled cache never returns entries and never writes them.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{EXTENSION}"))
    }

    /// Cached body for `name` if present and fresh.
    ///
    /// Unreadable entries are treated as misses.
    pub fn get(&self, name: &str) -> Option<String> {
        if !self.enabled || !is_plain_name(name) {
            return None;
        }

        let path = self.entry_path(name);
        let modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok()?;
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();

        if age > self.ttl {
            tracing::debug!(name, age_secs = age.as_secs(), "cache entry expired");
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), error = %e, "could not remove expired cache entry");
            }
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(body) => {
                tracing::debug!(name, "using cached template");
                Some(body)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read cache entry");
                None
            }
        }
    }

    /// Store `body` for `name`. No-op when the cache is disabled.
    pub fn put(&self, name: &str, body: &str) -> Result<()> {
        if !self.enabled || !is_plain_name(name) {
            return Ok(());
        }

        std::fs::create_dir_all(&self.dir).map_err(|e| Error::cache(&self.dir, e))?;
        let path = self.entry_path(name);
        std::fs::write(&path, body).map_err(|e| Error::cache(&self.dir, e))
    }

    /// Delete every cache entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(Error::cache(&self.dir, e)),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry.map_err(|e| Error::cache(&self.dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == EXTENSION) {
                std::fs::remove_file(&path).map_err(|e| Error::cache(&self.dir, e))?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn age(path: &Path, by: Duration) {
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - by).unwrap();
    }

    #[test]
    fn test_put_then_get() {
        let temp = TempDir::new().unwrap();
        let cache = TemplateCache::new(temp.path().join("cache"), Duration::from_secs(60));

        cache.put("Python", "__pycache__/\n").unwrap();

        assert_eq!(cache.get("Python").as_deref(), Some("__pycache__/\n"));
        assert!(temp.path().join("cache/Python.cache").exists());
    }

    #[test]
    fn test_expired_entry_is_deleted() {
        let temp = TempDir::new().unwrap();
        let cache = TemplateCache::new(temp.path(), Duration::from_secs(60));
        cache.put("Go", "vendor/\n").unwrap();
        let path = temp.path().join("Go.cache");
        age(&path, Duration::from_secs(3600));

        assert_eq!(cache.get("Go"), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_disabled_cache_is_inert() {
        let temp = TempDir::new().unwrap();
        let cache = TemplateCache::new(temp.path(), Duration::from_secs(60)).enabled(false);

        cache.put("Go", "vendor/\n").unwrap();
        assert!(!temp.path().join("Go.cache").exists());

        fs::write(temp.path().join("Go.cache"), "vendor/\n").unwrap();
        assert_eq!(cache.get("Go"), None);
    }

    #[test]
    fn test_clear_removes_only_cache_files() {
        let temp = TempDir::new().unwrap();
        let cache = TemplateCache::new(temp.path(), Duration::from_secs(60));
        cache.put("A", "a\n").unwrap();
        cache.put("B", "b\n").unwrap();
        fs::write(temp.path().join("keep.txt"), "").unwrap();

        assert_eq!(cache.clear().unwrap(), 2);
        assert!(temp.path().join("keep.txt").exists());
        assert_eq!(cache.clear().unwrap(), 0);
    }

    #[test]
    fn test_clear_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let cache = TemplateCache::new(temp.path().join("none"), Duration::from_secs(60));
        assert_eq!(cache.clear().unwrap(), 0);
    }
}
