//! Well-known locations used by gitig.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Name of the ignore file managed in a project directory.
pub const GITIGNORE: &str = ".gitignore";
/// Name of the global ignore file in the home directory.
pub const GLOBAL_GITIGNORE: &str = ".gitignore_global";
/// Local template used by `init` when no names are given.
pub const AUTO_TEMPLATE: &str = "auto";

const APP_DIR: &str = ".config/gitignore";
const TEMPLATES_DIR: &str = "templates";
const CACHE_DIR: &str = "cache";
const BACKUP_DIR: &str = "backups";
const CONFIG_FILE: &str = "config.conf";

/// Per-user directories: local templates, cache, backups and config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    home: PathBuf,
    root: PathBuf,
}

impl AppDirs {
    /// Locate the directories under the current user's home.
    pub fn discover() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::invalid_argument("could not determine the home directory"))?;
        Ok(Self::from_home(home))
    }

    /// Use `home` as the home directory.
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let root = home.join(APP_DIR);
        Self { home, root }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(TEMPLATES_DIR)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(BACKUP_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn global_gitignore(&self) -> PathBuf {
        self.home.join(GLOBAL_GITIGNORE)
    }
}
