//! Listing, showing and cache maintenance.

use gitig_core::{AppDirs, DEFAULT_CACHE_DURATION, Result};
use gitig_templates::{LocalTemplates, Template, TemplateCache, TemplateSource, builtin, standard_resolver};

/// Options for listing templates.
#[derive(Debug, Clone, Default)]
pub struct ListOptions<'a> {
    /// Case-insensitive substring filter.
    pub filter: Option<&'a str>,
    pub local: bool,
    pub builtin: bool,
}

/// Template names grouped by origin. A group is `None` when not requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub local: Option<Vec<String>>,
    pub builtin: Option<Vec<String>>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.local.as_ref().is_none_or(Vec::is_empty)
            && self.builtin.as_ref().is_none_or(Vec::is_empty)
    }
}

/// List local and built-in template names. Both groups are listed unless
/// exactly one is asked for.
pub fn list(dirs: &AppDirs, opts: ListOptions) -> Result<Listing> {
    let both = opts.local == opts.builtin;
    let needle = opts.filter.map(str::to_lowercase);
    let keep = |name: &str| {
        needle
            .as_deref()
            .is_none_or(|n| name.to_lowercase().contains(n))
    };

    let local = if both || opts.local {
        let names = LocalTemplates::new(dirs.templates_dir()).names()?;
        Some(names.into_iter().filter(|n| keep(n)).collect())
    } else {
        None
    };

    let builtin = if both || opts.builtin {
        Some(
            builtin::names()
                .filter(|n| keep(n))
                .map(str::to_string)
                .collect(),
        )
    } else {
        None
    };

    Ok(Listing { local, builtin })
}

/// A template's content, from the local directory or the built-in catalog.
pub fn show(dirs: &AppDirs, name: &str) -> Result<Template> {
    standard_resolver(dirs).resolve(name)
}

/// Remove every cached download. Returns how many entries were deleted.
pub fn clear_cache(dirs: &AppDirs) -> Result<usize> {
    let removed = TemplateCache::new(dirs.cache_dir(), DEFAULT_CACHE_DURATION).clear()?;
    tracing::info!(removed, "cleared template cache");
    Ok(removed)
}
