//! Template resolution.
//!
//! A [`TemplateSource`] turns a name into a [`Template`]. The [`Resolver`]
//! chains sources and returns the first match, so the order sources are added
//! in is the precedence order.

use std::fmt;

use gitig_core::{
    Error, Result,
    lines::{self, Line},
};

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// User file in the local templates directory.
    Local,
    /// Compiled-in catalog.
    Builtin,
    /// Previously downloaded copy still within the freshness window.
    Cache,
    /// Downloaded during this invocation.
    Remote,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Builtin => write!(f, "built-in"),
            Self::Cache => write!(f, "cache"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// A resolved template body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    body: String,
    origin: Origin,
}

impl Template {
    pub fn new(name: impl Into<String>, body: impl Into<String>, origin: Origin) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            origin,
        }
    }

    /// The name the template was requested by.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The body split into classified lines.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        lines::tokenize(&self.body)
    }
}

/// Something that can turn a template name into its body.
pub trait TemplateSource {
    /// Resolve `name`. Returns [`Error::InvalidTemplate`] when this source
    /// has no such template; other errors mean the source failed.
    fn resolve(&self, name: &str) -> Result<Template>;
}

impl<T: TemplateSource + ?Sized> TemplateSource for &T {
    fn resolve(&self, name: &str) -> Result<Template> {
        (**self).resolve(name)
    }
}

impl<T: TemplateSource + ?Sized> TemplateSource for Box<T> {
    fn resolve(&self, name: &str) -> Result<Template> {
        (**self).resolve(name)
    }
}

/// Ordered chain of sources; the first source that knows a name wins.
#[derive(Default)]
pub struct Resolver {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than those already added.
    pub fn with(mut self, source: impl TemplateSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl TemplateSource for Resolver {
    /// Only [`Error::InvalidTemplate`] moves on to the next source. Any other
    /// failure ends the lookup, so a broken override never hides behind a
    /// lower-precedence copy.
    fn resolve(&self, name: &str) -> Result<Template> {
        for source in &self.sources {
            match source.resolve(name) {
                Ok(template) => {
                    tracing::debug!(name, origin = %template.origin(), "resolved template");
                    return Ok(template);
                }
                Err(e) if matches!(*e, Error::InvalidTemplate { .. }) => {}
                Err(e) => {
                    tracing::debug!(name, error = %e, "template source failed");
                    return Err(e);
                }
            }
        }

        Err(Error::invalid_template(name))
    }
}

/// Whether `name` can be used as a file name inside a gitig directory.
pub(crate) fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}
