//! Reports for templates, backups and the cache.

use std::path::Path;

use gitig_merge::ops::{GlobalInit, Listing};
use gitig_templates::Template;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct ListReport<'a> {
    pub listing: &'a Listing,
}

impl Report for ListReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.listing.is_empty() {
            out.hint("No matching templates");
            return;
        }

        let groups = [
            ("Local templates", &self.listing.local),
            ("Built-in templates", &self.listing.builtin),
        ];
        let mut first = true;
        for (title, names) in groups {
            let Some(names) = names else { continue };
            if names.is_empty() {
                continue;
            }
            if !first {
                out.newline();
            }
            first = false;
            out.section(title);
            for name in names {
                out.list_item(name);
            }
        }
    }
}

/// A template body, printed verbatim.
#[derive(Debug)]
pub struct TemplateReport<'a> {
    pub template: &'a Template,
}

impl Report for TemplateReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(self.template.body());
    }
}

#[derive(Debug)]
pub struct BackupsReport<'a> {
    pub backups: &'a [String],
    pub dir: &'a Path,
}

impl Report for BackupsReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if self.backups.is_empty() {
            out.hint(&format!("No backups in {}", self.dir.display()));
            return;
        }
        out.section(&format!("Backups in {}", self.dir.display()));
        for name in self.backups {
            out.list_item(name);
        }
        out.newline();
        out.hint("Restore one with 'gitig restore <name>'");
    }
}

#[derive(Debug)]
pub struct CacheClearReport {
    pub removed: usize,
}

impl Report for CacheClearReport {
    fn render(&self, out: &mut dyn Output) {
        out.success(&format!("Removed {} cached template(s)", self.removed));
    }
}

#[derive(Debug)]
pub struct GlobalInitReport<'a> {
    pub init: &'a GlobalInit,
}

impl Report for GlobalInitReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        let path = self.init.path.display();
        if self.init.created {
            out.success(&format!("Created {path}"));
            out.hint(&format!(
                "Enable it with: git config --global core.excludesfile {path}"
            ));
        } else {
            out.success(&format!("{path} already exists, left untouched"));
        }
    }
}
