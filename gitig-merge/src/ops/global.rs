//! Global ignore file - `~/.gitignore_global`.

use std::path::{Path, PathBuf};

use gitig_core::{
    AppDirs, Error, GLOBAL_GITIGNORE, GeneratedFile, Result, Settings, VERSION, WriteResult,
};
use gitig_templates::{TemplateSource, builtin};

use super::{Change, Outcome, Plan};
use crate::{
    detect::os_template,
    engine::{MergeEngine, MergeStrategy},
    names::NameList,
};

/// The user-wide ignore file, seeded with the current OS's patterns.
pub struct GlobalGitignore {
    os: Option<&'static str>,
}

impl GlobalGitignore {
    pub fn new() -> Self {
        Self { os: os_template() }
    }

    pub fn for_os(os: Option<&'static str>) -> Self {
        Self { os }
    }
}

impl Default for GlobalGitignore {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for GlobalGitignore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(GLOBAL_GITIGNORE)
    }

    fn render(&self) -> String {
        let mut out = format!(
            "# Global gitignore\n\
             # Generated by gitig v{VERSION}\n\
             #\n\
             # Enable it with:\n\
             #   git config --global core.excludesfile ~/{GLOBAL_GITIGNORE}\n\n"
        );
        if let Some(template) = self.os.and_then(builtin::get) {
            out.push_str(&format!("# ===== {} =====\n", template.name));
            out.push_str(template.content);
            if !template.content.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalInit {
    pub path: PathBuf,
    /// `false` when the file already existed.
    pub created: bool,
}

/// Create the global ignore file unless it already exists.
pub fn global_init(dirs: &AppDirs) -> Result<GlobalInit> {
    let file = GlobalGitignore::new();
    let path = file.path(dirs.home());
    let created = file.write(dirs.home())? == WriteResult::Written;
    if created {
        tracing::info!(path = %path.display(), "created global gitignore");
    }
    Ok(GlobalInit { path, created })
}

/// Smart-merge templates into the existing global ignore file.
pub fn global_add(
    dirs: &AppDirs,
    settings: &Settings,
    source: &dyn TemplateSource,
    names: &[String],
    dry_run: bool,
) -> Result<Outcome> {
    let output = dirs.global_gitignore();
    if !output.exists() {
        return Err(Error::not_found(
            &output,
            "run 'gitig global init' to create it",
        ));
    }

    let names = NameList::normalize(names);
    if names.is_empty() {
        return Err(Error::invalid_argument("no template names given"));
    }

    if dry_run {
        let plan = Plan {
            target: output,
            templates: names.names().to_vec(),
            strategy: Some(MergeStrategy::Smart),
        };
        return Ok(Outcome::planned(names, plan));
    }

    let merge = MergeEngine::new(source)
        .dedupe_within_merge(settings.dedupe_within_merge)
        .merge(names.names(), &output, MergeStrategy::Smart)?;

    Ok(Outcome {
        names,
        backup: None,
        change: Change::Merged(merge),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gitig_templates::standard_resolver;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_without_os() {
        insta::assert_snapshot!(GlobalGitignore::for_os(None).render(), @r"
        # Global gitignore
        # Generated by gitig v0.1.0
        #
        # Enable it with:
        #   git config --global core.excludesfile ~/.gitignore_global
        ");
    }

    #[test]
    fn test_render_with_os_patterns() {
        let content = GlobalGitignore::for_os(Some("linux")).render();
        assert!(content.contains("# ===== linux =====\n*~\n"));
        assert!(content.ends_with(".nfs*\n"));
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());

        assert!(global_init(&dirs).unwrap().created);
        fs::write(dirs.global_gitignore(), "mine\n").unwrap();

        let second = global_init(&dirs).unwrap();
        assert!(!second.created);
        assert_eq!(fs::read_to_string(second.path).unwrap(), "mine\n");
    }

    #[test]
    fn test_add_requires_existing_file() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());

        let err = global_add(
            &dirs,
            &Settings::default(),
            &standard_resolver(&dirs),
            &["linux".to_string()],
            false,
        )
        .unwrap_err();

        assert!(matches!(*err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_add_merges_smart() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        fs::write(dirs.global_gitignore(), ".DS_Store\n").unwrap();

        let outcome = global_add(
            &dirs,
            &Settings::default(),
            &standard_resolver(&dirs),
            &["macos".to_string()],
            false,
        )
        .unwrap();

        assert_eq!(outcome.merge().unwrap().lines_dropped, 1);
        let content = fs::read_to_string(dirs.global_gitignore()).unwrap();
        assert_eq!(content.lines().filter(|l| *l == ".DS_Store").count(), 1);
    }
}
