//! Progress bar around template resolution.

use gitig_core::Result;
use gitig_templates::{Template, TemplateSource};
use indicatif::{ProgressBar, ProgressStyle};

/// Ticks a progress bar once per resolved (or failed) template.
pub struct Progress<S> {
    inner: S,
    bar: ProgressBar,
}

impl<S: TemplateSource> Progress<S> {
    pub fn new(inner: S, total: usize, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total as u64)
        };
        bar.set_style(
            ProgressStyle::with_template("{spinner:.blue} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .map(|style| style.progress_chars("=> "))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { inner, bar }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl<S: TemplateSource> TemplateSource for Progress<S> {
    fn resolve(&self, name: &str) -> Result<Template> {
        self.bar.set_message(name.to_string());
        let result = self.inner.resolve(name);
        self.bar.inc(1);
        result
    }
}
