//! Templates downloaded from the github/gitignore repository.

use std::time::Duration;

use gitig_core::{Error, Result, VERSION};

use crate::{
    cache::TemplateCache,
    source::{Origin, Template, TemplateSource, is_plain_name},
};

/// Raw file base URL of the upstream template collection.
pub const GITHUB_RAW_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main/";

/// Upper bound for a single download.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches the raw body of a named template.
pub trait Fetch {
    fn fetch(&self, name: &str) -> Result<String>;
}

/// Blocking HTTP fetcher for `<base>/<name>.gitignore`.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_RAW_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(format!("gitig/{VERSION}"))
            .build()
            .map_err(|e| {
                Box::new(Error::HttpClient {
                    reason: e.to_string(),
                })
            })?;

        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}{}.gitignore", self.base_url, name)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, name: &str) -> Result<String> {
        let url = self.url_for(name);
        tracing::info!(%url, "downloading template");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::network(name, e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(Error::network(name, format!("HTTP {}", status.as_u16())));
        }

        let body = response
            .text()
            .map_err(|e| Error::network(name, e.to_string()))?;
        if body.is_empty() {
            return Err(Error::network(name, "empty response"));
        }
        Ok(body)
    }
}

/// Cache-first remote source: a fresh cache entry, else a download that is
/// written back to the cache.
pub struct RemoteSource {
    cache: TemplateCache,
    fetcher: Box<dyn Fetch>,
}

impl RemoteSource {
    pub fn new(cache: TemplateCache, fetcher: impl Fetch + 'static) -> Self {
        Self {
            cache,
            fetcher: Box::new(fetcher),
        }
    }
}

impl TemplateSource for RemoteSource {
    fn resolve(&self, name: &str) -> Result<Template> {
        if !is_plain_name(name) {
            return Err(Error::invalid_template(name));
        }

        if let Some(body) = self.cache.get(name) {
            return Ok(Template::new(name, body, Origin::Cache));
        }

        let body = self.fetcher.fetch(name)?;
        if let Err(e) = self.cache.put(name, &body) {
            tracing::warn!(name, error = %e, "could not cache template");
        }
        Ok(Template::new(name, body, Origin::Remote))
    }
}
