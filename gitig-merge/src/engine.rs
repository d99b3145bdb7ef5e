//! The template merge engine.
//!
//! Resolves template names through a [`TemplateSource`] and writes their
//! bodies into an ignore file under one of three strategies. Every name is
//! resolved and the existing-pattern index is built before the output is
//! opened, so a failed lookup never leaves a half-written file behind.

use std::{
    fmt,
    fs::OpenOptions,
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use gitig_core::{Error, Result, VERSION};
use gitig_templates::{Origin, Template, TemplateSource};

use crate::index::PatternIndex;

/// How template content is combined with an existing output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeStrategy {
    /// Truncate the output and write the templates.
    Replace,
    /// Append every template line as-is.
    Append,
    /// Append, dropping pattern lines the output already contains.
    Smart,
}

impl MergeStrategy {
    pub fn truncates(self) -> bool {
        matches!(self, MergeStrategy::Replace)
    }

    pub fn dedupes(self) -> bool {
        matches!(self, MergeStrategy::Smart)
    }

    /// `Replace` for a missing output, `Smart` for an existing one.
    pub fn for_output(path: &Path) -> Self {
        if path.exists() {
            MergeStrategy::Smart
        } else {
            MergeStrategy::Replace
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MergeStrategy::Replace => "replace",
            MergeStrategy::Append => "append",
            MergeStrategy::Smart => "smart",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTemplate {
    pub name: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTemplate {
    pub name: String,
    pub reason: String,
}

/// What a merge did to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub output: PathBuf,
    pub strategy: MergeStrategy,
    pub applied: Vec<AppliedTemplate>,
    pub skipped: Vec<SkippedTemplate>,
    /// Pattern lines written to the output.
    pub lines_written: usize,
    /// Pattern lines dropped as already present.
    pub lines_dropped: usize,
}

impl MergeOutcome {
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

pub struct MergeEngine<'a> {
    source: &'a dyn TemplateSource,
    dedupe_within_merge: bool,
    require_any: bool,
}

impl<'a> MergeEngine<'a> {
    pub fn new(source: &'a dyn TemplateSource) -> Self {
        Self {
            source,
            dedupe_within_merge: false,
            require_any: false,
        }
    }

    /// Under `Smart`, also drop pattern lines repeated by earlier templates
    /// of the same call. Off by default: the index is a snapshot of the file.
    pub fn dedupe_within_merge(mut self, enabled: bool) -> Self {
        self.dedupe_within_merge = enabled;
        self
    }

    /// Fail without touching the output when no name resolves.
    pub fn require_any(mut self, enabled: bool) -> Self {
        self.require_any = enabled;
        self
    }

    pub fn merge(
        &self,
        names: &[String],
        output: &Path,
        strategy: MergeStrategy,
    ) -> Result<MergeOutcome> {
        let mut index = if strategy.dedupes() {
            PatternIndex::build(output)?
        } else {
            PatternIndex::default()
        };

        let mut resolved = Vec::with_capacity(names.len());
        let mut skipped = Vec::new();
        let mut last_error = None;
        for name in names {
            match self.source.resolve(name) {
                Ok(template) => {
                    tracing::debug!(name, origin = %template.origin(), "resolved template");
                    resolved.push(template);
                }
                Err(e) => {
                    tracing::warn!(name, error = %e, "skipping template");
                    skipped.push(SkippedTemplate {
                        name: name.clone(),
                        reason: e.to_string(),
                    });
                    last_error = Some(e);
                }
            }
        }

        if self.require_any && resolved.is_empty() {
            return Err(last_error
                .unwrap_or_else(|| Error::invalid_argument("no templates to merge")));
        }

        let tail = if strategy.truncates() {
            None
        } else {
            last_byte(output)?
        };

        let mut text = String::new();
        if strategy.truncates() {
            text.push_str(&format!("# Generated by gitig v{VERSION}\n\n"));
        } else {
            match tail {
                None => {}
                Some(b'\n') => text.push('\n'),
                Some(_) => text.push_str("\n\n"),
            }
            text.push_str(&format!("# Appended by gitig v{VERSION}\n\n"));
        }

        let mut lines_written = 0;
        let mut lines_dropped = 0;
        for template in &resolved {
            let (written, dropped) = self.render_section(template, strategy, &mut index, &mut text);
            lines_written += written;
            lines_dropped += dropped;
        }

        let mut file = if strategy.truncates() {
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output)
        } else {
            OpenOptions::new().append(true).create(true).open(output)
        }
        .map_err(|e| Error::io(output, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io(output, e))?;

        tracing::info!(
            path = %output.display(),
            %strategy,
            templates = resolved.len(),
            lines_written,
            lines_dropped,
            "merged templates"
        );

        Ok(MergeOutcome {
            output: output.to_path_buf(),
            strategy,
            applied: resolved
                .iter()
                .map(|t| AppliedTemplate {
                    name: t.name().to_string(),
                    origin: t.origin(),
                })
                .collect(),
            skipped,
            lines_written,
            lines_dropped,
        })
    }

    fn render_section(
        &self,
        template: &Template,
        strategy: MergeStrategy,
        index: &mut PatternIndex,
        out: &mut String,
    ) -> (usize, usize) {
        let mut written = 0;
        let mut dropped = 0;

        out.push_str(&format!("# ===== {} =====\n", template.name()));
        for line in template.lines() {
            if let Some(pattern) = line.pattern() {
                if strategy.dedupes() {
                    if index.contains(pattern) {
                        dropped += 1;
                        continue;
                    }
                    if self.dedupe_within_merge {
                        index.insert(pattern);
                    }
                }
                written += 1;
            }

            out.push_str(line.raw());
            if !line.is_terminated() {
                out.push('\n');
            }
        }
        out.push('\n');

        (written, dropped)
    }
}

/// Last byte of the file at `path`, or `None` if it is missing or empty.
pub(crate) fn last_byte(path: &Path) -> Result<Option<u8>> {
    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
    if len == 0 {
        return Ok(None);
    }

    let mut byte = [0u8; 1];
    file.seek(SeekFrom::End(-1))
        .and_then(|_| file.read_exact(&mut byte))
        .map_err(|e| Error::io(path, e))?;
    Ok(Some(byte[0]))
}
