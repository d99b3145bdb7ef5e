//! Pattern addition - append individual patterns to `.gitignore`.

use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

use gitig_core::{Error, Result};

use super::Project;
use crate::{engine::last_byte, index::PatternIndex};

/// Options for adding patterns.
pub struct PatternsOptions<'a> {
    pub patterns: &'a [String],
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternsOutcome {
    pub path: PathBuf,
    pub dry_run: bool,
    pub backup: Option<PathBuf>,
    /// Patterns written (or, for a dry run, that would be written).
    pub added: Vec<String>,
    /// Patterns already present in the file or earlier in the call.
    pub skipped: Vec<String>,
}

impl PatternsOutcome {
    pub fn has_additions(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Append each pattern not already present, creating the file if needed.
///
/// More than one new pattern is introduced by an `# Added by gitig` comment.
pub fn add_patterns(project: &Project, opts: PatternsOptions) -> Result<PatternsOutcome> {
    if opts.patterns.is_empty() {
        return Err(Error::invalid_argument("no patterns given"));
    }

    let path = project.gitignore();
    let mut index = PatternIndex::build(&path)?;
    let mut added = Vec::new();
    let mut skipped = Vec::new();
    for pattern in opts.patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }
        if index.insert(pattern) {
            added.push(pattern.to_string());
        } else {
            tracing::debug!(pattern, "pattern already present");
            skipped.push(pattern.to_string());
        }
    }

    if opts.dry_run || added.is_empty() {
        return Ok(PatternsOutcome {
            path,
            dry_run: opts.dry_run,
            backup: None,
            added,
            skipped,
        });
    }

    let backup = project.backup_if_enabled()?;

    let mut text = String::new();
    let tail = last_byte(&path)?;
    if tail.is_some_and(|b| b != b'\n') {
        text.push('\n');
    }
    if added.len() > 1 {
        if tail.is_some() {
            text.push('\n');
        }
        text.push_str("# Added by gitig\n");
    }
    for pattern in &added {
        text.push_str(pattern);
        text.push('\n');
    }

    OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|e| Error::io(&path, e))?;
    tracing::info!(path = %path.display(), count = added.len(), "added patterns");

    Ok(PatternsOutcome {
        path,
        dry_run: false,
        backup,
        added,
        skipped,
    })
}
