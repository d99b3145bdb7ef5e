//! Core operations.
//!
//! The business logic behind each gitig command, separated from argument
//! parsing and output rendering. Every mutating operation accepts a
//! `dry_run` flag and then returns a [`Change::Planned`] without touching
//! the filesystem.

use std::path::{Path, PathBuf};

use gitig_core::{AppDirs, GITIGNORE, Result, Settings};
use gitig_templates::TemplateSource;

use crate::{
    backup,
    engine::{MergeEngine, MergeOutcome, MergeStrategy},
    names::NameList,
};

pub mod auto;
pub mod catalog;
pub mod global;
pub mod init;
pub mod patterns;
pub mod sync;
pub mod update;

pub use auto::{AutoOutcome, auto};
pub use catalog::{ListOptions, Listing, clear_cache, list, show};
pub use global::{GlobalGitignore, GlobalInit, global_add, global_init};
pub use init::{InitOptions, init};
pub use patterns::{PatternsOptions, PatternsOutcome, add_patterns};
pub use sync::{SyncOptions, sync};
pub use update::{UpdateOptions, update};

/// The project an operation works on, plus the user's environment.
#[derive(Debug, Clone, Copy)]
pub struct Project<'a> {
    /// Directory holding the `.gitignore`.
    pub dir: &'a Path,
    pub dirs: &'a AppDirs,
    pub settings: &'a Settings,
}

impl<'a> Project<'a> {
    pub fn new(dir: &'a Path, dirs: &'a AppDirs, settings: &'a Settings) -> Self {
        Self {
            dir,
            dirs,
            settings,
        }
    }

    pub fn gitignore(&self) -> PathBuf {
        self.dir.join(GITIGNORE)
    }

    /// Engine configured from the user's settings.
    pub fn engine<'s>(&self, source: &'s dyn TemplateSource) -> MergeEngine<'s> {
        MergeEngine::new(source).dedupe_within_merge(self.settings.dedupe_within_merge)
    }

    /// Back up the existing `.gitignore` when `auto_backup` is set.
    pub(crate) fn backup_if_enabled(&self) -> Result<Option<PathBuf>> {
        let path = self.gitignore();
        if !self.settings.auto_backup || !path.exists() {
            return Ok(None);
        }
        backup::create(self.dirs, &path).map(Some)
    }
}

/// What a mutating operation would do, reported instead of doing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub target: PathBuf,
    pub templates: Vec<String>,
    /// `None` when no merge would run.
    pub strategy: Option<MergeStrategy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Planned(Plan),
    Merged(MergeOutcome),
    /// A fresh placeholder file was written.
    Placeholder(PathBuf),
    /// The file already existed and nothing was asked of it.
    Unchanged(PathBuf),
}

/// Result of init, update, sync and global add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub names: NameList,
    pub backup: Option<PathBuf>,
    pub change: Change,
}

impl Outcome {
    pub(crate) fn planned(names: NameList, plan: Plan) -> Self {
        Self {
            names,
            backup: None,
            change: Change::Planned(plan),
        }
    }

    pub fn merge(&self) -> Option<&MergeOutcome> {
        match &self.change {
            Change::Merged(merge) => Some(merge),
            _ => None,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self.change, Change::Planned(_))
    }
}
