//! User templates stored as `<name>.gitignore` files.

use std::path::{Path, PathBuf};

use gitig_core::{Error, Result};

use crate::source::{Origin, Template, TemplateSource, is_plain_name};

const EXTENSION: &str = ".gitignore";

/// The local templates directory.
#[derive(Debug, Clone)]
pub struct LocalTemplates {
    dir: PathBuf,
}

impl LocalTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `name`. A name that already ends in `.gitignore` is used as-is.
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.ends_with(EXTENSION) {
            self.dir.join(name)
        } else {
            self.dir.join(format!("{name}{EXTENSION}"))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        is_plain_name(name) && self.path_for(name).is_file()
    }

    /// Names of all local templates, sorted.
    pub fn names(&self) -> Result<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::io(&self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.dir, e))?;
            let file_name = entry.file_name();
            if let Some(name) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(EXTENSION))
                .filter(|n| !n.is_empty())
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl TemplateSource for LocalTemplates {
    fn resolve(&self, name: &str) -> Result<Template> {
        if !is_plain_name(name) {
            return Err(Error::invalid_template(name));
        }

        let path = self.path_for(name);
        match std::fs::read_to_string(&path) {
            Ok(body) => Ok(Template::new(name, body, Origin::Local)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::invalid_template(name))
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }
}
