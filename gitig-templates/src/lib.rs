//! Template catalog and resolution for gitig.
//!
//! Templates come from, in order of precedence: the user's local templates
//! directory, the compiled-in catalog, and (for sync) a cache-first download
//! from the github/gitignore repository.

pub mod builtin;
mod cache;
mod local;
mod remote;
mod source;

pub use builtin::BuiltinCatalog;
pub use cache::TemplateCache;
use gitig_core::{AppDirs, Settings};
pub use local::LocalTemplates;
pub use remote::{FETCH_TIMEOUT, Fetch, GITHUB_RAW_URL, HttpFetcher, RemoteSource};
pub use source::{Origin, Resolver, Template, TemplateSource};

/// Local templates, then built-ins.
pub fn standard_resolver(dirs: &AppDirs) -> Resolver {
    Resolver::new()
        .with(LocalTemplates::new(dirs.templates_dir()))
        .with(BuiltinCatalog)
}

/// Resolver used by sync: the standard chain followed by the cache-first
/// remote source, or only the remote source when `remote_only` is set.
pub fn sync_resolver(
    dirs: &AppDirs,
    settings: &Settings,
    fetcher: impl Fetch + 'static,
    remote_only: bool,
) -> Resolver {
    let cache = TemplateCache::from_settings(dirs.cache_dir(), settings);
    let remote = RemoteSource::new(cache, fetcher);

    if remote_only {
        Resolver::new().with(remote)
    } else {
        standard_resolver(dirs).with(remote)
    }
}
