//! Init operation - create or extend a project's `.gitignore`.

use std::path::{Path, PathBuf};

use gitig_core::{AUTO_TEMPLATE, GITIGNORE, GeneratedFile, Result, WriteResult};
use gitig_templates::{LocalTemplates, TemplateSource};

use super::{Change, Outcome, Plan, Project};
use crate::{engine::MergeStrategy, names::NameList};

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Template names as given by the user.
    pub names: &'a [String],
    /// Whether to report the plan without writing.
    pub dry_run: bool,
}

/// Starter file written when no template is requested.
pub struct Placeholder;

impl GeneratedFile for Placeholder {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(GITIGNORE)
    }

    fn render(&self) -> String {
        "# .gitignore\n# Add your ignore patterns here\n\n".to_string()
    }
}

/// Execute the init operation.
///
/// Named templates are merged with `Replace` into a missing file and with
/// `Smart` into an existing one. Without names the user's `auto` template
/// is used if there is one, else a placeholder is written to a missing file.
pub fn init(project: &Project, source: &dyn TemplateSource, opts: InitOptions) -> Result<Outcome> {
    let output = project.gitignore();
    let names = NameList::normalize(opts.names);
    let local = LocalTemplates::new(project.dirs.templates_dir());
    let use_auto = names.is_empty() && local.contains(AUTO_TEMPLATE);
    let strategy = MergeStrategy::for_output(&output);

    if opts.dry_run {
        let plan = if !names.is_empty() {
            Plan {
                target: output,
                templates: names.names().to_vec(),
                strategy: Some(strategy),
            }
        } else if use_auto {
            Plan {
                target: output,
                templates: vec![AUTO_TEMPLATE.to_string()],
                strategy: Some(strategy),
            }
        } else {
            Plan {
                target: output,
                templates: Vec::new(),
                strategy: None,
            }
        };
        return Ok(Outcome::planned(names, plan));
    }

    if names.is_empty() && !use_auto && output.exists() {
        tracing::info!(path = %output.display(), "already exists, leaving untouched");
        return Ok(Outcome {
            names,
            backup: None,
            change: Change::Unchanged(output),
        });
    }

    let backup = project.backup_if_enabled()?;

    let change = if !names.is_empty() {
        Change::Merged(
            project
                .engine(source)
                .merge(names.names(), &output, strategy)?,
        )
    } else if use_auto {
        tracing::debug!("using local auto template");
        Change::Merged(project.engine(&local).merge(
            &[AUTO_TEMPLATE.to_string()],
            &output,
            strategy,
        )?)
    } else {
        match Placeholder.write(project.dir)? {
            WriteResult::Written => Change::Placeholder(output),
            WriteResult::Skipped => Change::Unchanged(output),
        }
    };

    Ok(Outcome {
        names,
        backup,
        change,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gitig_core::{AppDirs, Settings};
    use gitig_templates::standard_resolver;
    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        home: TempDir,
        project: TempDir,
        dirs: AppDirs,
        settings: Settings,
    }

    impl Fixture {
        fn new() -> Self {
            let home = TempDir::new().unwrap();
            let dirs = AppDirs::from_home(home.path());
            Self {
                home,
                project: TempDir::new().unwrap(),
                dirs,
                settings: Settings::default(),
            }
        }

        fn run(&self, names: &[&str], dry_run: bool) -> Outcome {
            let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
            let project = Project::new(self.project.path(), &self.dirs, &self.settings);
            let resolver = standard_resolver(&self.dirs);
            init(
                &project,
                &resolver,
                InitOptions {
                    names: &names,
                    dry_run,
                },
            )
            .unwrap()
        }

        fn gitignore(&self) -> PathBuf {
            self.project.path().join(GITIGNORE)
        }
    }

    #[test]
    fn test_no_names_writes_placeholder() {
        let fx = Fixture::new();

        let outcome = fx.run(&[], false);

        assert!(matches!(outcome.change, Change::Placeholder(_)));
        assert_eq!(
            fs::read_to_string(fx.gitignore()).unwrap(),
            "# .gitignore\n# Add your ignore patterns here\n\n"
        );
    }

    #[test]
    fn test_no_names_leaves_existing_file() {
        let fx = Fixture::new();
        fs::write(fx.gitignore(), "mine/\n").unwrap();

        let outcome = fx.run(&[], false);

        assert!(matches!(outcome.change, Change::Unchanged(_)));
        assert_eq!(fs::read_to_string(fx.gitignore()).unwrap(), "mine/\n");
    }

    #[test]
    fn test_auto_template_used_without_names() {
        let fx = Fixture::new();
        fs::create_dir_all(fx.dirs.templates_dir()).unwrap();
        fs::write(fx.dirs.templates_dir().join("auto.gitignore"), ".env\n").unwrap();

        let outcome = fx.run(&[], false);

        let merge = outcome.merge().unwrap();
        assert_eq!(merge.strategy, MergeStrategy::Replace);
        assert!(
            fs::read_to_string(fx.gitignore())
                .unwrap()
                .contains("# ===== auto =====\n.env\n")
        );
    }

    #[test]
    fn test_names_normalized_before_merge() {
        let fx = Fixture::new();

        let outcome = fx.run(&["Python", "python", "#rust", "go"], false);

        assert_eq!(outcome.names.names(), ["Python", "go"]);
        let merge = outcome.merge().unwrap();
        assert_eq!(merge.applied.len(), 2);
        let content = fs::read_to_string(fx.gitignore()).unwrap();
        assert_eq!(content.matches("# ===== Python =====").count(), 1);
        assert!(!content.contains("# ===== rust"));
    }

    #[test]
    fn test_existing_file_is_merged_smart() {
        let fx = Fixture::new();
        fs::write(fx.gitignore(), "vendor/\n").unwrap();

        let outcome = fx.run(&["go"], false);

        let merge = outcome.merge().unwrap();
        assert_eq!(merge.strategy, MergeStrategy::Smart);
        assert!(merge.lines_dropped >= 1);
        let content = fs::read_to_string(fx.gitignore()).unwrap();
        assert!(content.starts_with("vendor/\n"));
        assert_eq!(content.lines().filter(|l| *l == "vendor/").count(), 1);
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let fx = Fixture::new();

        let outcome = fx.run(&["rust"], true);

        let Change::Planned(plan) = outcome.change else {
            panic!("expected a plan");
        };
        assert_eq!(plan.templates, ["rust"]);
        assert_eq!(plan.strategy, Some(MergeStrategy::Replace));
        assert!(!fx.gitignore().exists());
    }

    #[test]
    fn test_auto_backup_before_merge() {
        let mut fx = Fixture::new();
        fx.settings.auto_backup = true;
        fs::write(fx.gitignore(), "old/\n").unwrap();

        let outcome = fx.run(&["node"], false);

        let backup = outcome.backup.expect("backup created");
        assert!(backup.starts_with(fx.home.path()));
        assert_eq!(fs::read_to_string(backup).unwrap(), "old/\n");
    }
}
