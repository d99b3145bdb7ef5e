//! User settings loaded from `config.conf`.
//!
//! The file holds `key=value` lines with `#` comments, which is valid TOML,
//! so it is deserialized with `toml`. Unknown keys are ignored. The loaded
//! [`Settings`] value is built once per process and passed to whatever needs it.

use std::{path::Path, time::Duration};

use serde::Deserialize;

use crate::{Error, Result};

/// Default freshness window for cached remote templates.
pub const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Back up `.gitignore` before any command mutates it.
    pub auto_backup: bool,
    /// Read and write the remote template cache.
    pub cache_enabled: bool,
    /// How long a cached template stays valid.
    pub cache_duration: Duration,
    pub verbose: bool,
    pub quiet: bool,
    pub use_color: bool,
    /// Smart merges also skip lines already written earlier in the same merge.
    pub dedupe_within_merge: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_backup: false,
            cache_enabled: true,
            cache_duration: DEFAULT_CACHE_DURATION,
            verbose: false,
            quiet: false,
            use_color: console::colors_enabled(),
            dedupe_within_merge: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    auto_backup: Option<bool>,
    cache_enabled: Option<bool>,
    cache_duration: Option<u64>,
    verbose: Option<bool>,
    quiet: Option<bool>,
    use_color: Option<bool>,
    dedupe_within_merge: Option<bool>,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse settings from config text.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawSettings =
            toml::from_str(content).map_err(|e| Error::config(e, content, filename))?;
        let defaults = Self::default();

        Ok(Self {
            auto_backup: raw.auto_backup.unwrap_or(defaults.auto_backup),
            cache_enabled: raw.cache_enabled.unwrap_or(defaults.cache_enabled),
            cache_duration: raw
                .cache_duration
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_duration),
            verbose: raw.verbose.unwrap_or(defaults.verbose),
            quiet: raw.quiet.unwrap_or(defaults.quiet),
            use_color: raw.use_color.unwrap_or(defaults.use_color),
            dedupe_within_merge: raw
                .dedupe_within_merge
                .unwrap_or(defaults.dedupe_within_merge),
        })
    }

    /// Apply command-line overrides. Quiet wins over verbose.
    pub fn with_overrides(mut self, verbose: bool, quiet: bool) -> Self {
        if verbose {
            self.verbose = true;
        }
        if quiet {
            self.quiet = true;
            self.verbose = false;
        }
        self
    }
}
