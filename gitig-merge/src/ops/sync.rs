//! Sync operation - merge templates resolved through the remote-capable chain.

use gitig_core::{Error, Result};
use gitig_templates::TemplateSource;

use super::{Change, Outcome, Plan, Project};
use crate::{engine::MergeStrategy, names::NameList};

/// Options for the sync operation.
pub struct SyncOptions<'a> {
    pub names: &'a [String],
    pub dry_run: bool,
}

/// Execute the sync operation.
///
/// Unlike init, the output is left untouched when none of the names resolve.
pub fn sync(project: &Project, source: &dyn TemplateSource, opts: SyncOptions) -> Result<Outcome> {
    let names = NameList::normalize(opts.names);
    if names.is_empty() {
        return Err(Error::invalid_argument("no template names given"));
    }

    let output = project.gitignore();
    let strategy = MergeStrategy::for_output(&output);

    if opts.dry_run {
        let plan = Plan {
            target: output,
            templates: names.names().to_vec(),
            strategy: Some(strategy),
        };
        return Ok(Outcome::planned(names, plan));
    }

    let backup = project.backup_if_enabled()?;
    let merge = project
        .engine(source)
        .require_any(true)
        .merge(names.names(), &output, strategy)?;

    Ok(Outcome {
        names,
        backup,
        change: Change::Merged(merge),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gitig_core::{AppDirs, GITIGNORE, Settings};
    use gitig_templates::standard_resolver;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_single_unresolvable_name_fails_without_writing() {
        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let settings = Settings::default();
        let path = dir.path().join(GITIGNORE);
        fs::write(&path, "keep/\n").unwrap();

        let err = sync(
            &Project::new(dir.path(), &dirs, &settings),
            &standard_resolver(&dirs),
            SyncOptions {
                names: &["doesnotexist123".to_string()],
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidTemplate { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep/\n");
    }

    #[test]
    fn test_empty_names_rejected() {
        let home = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let settings = Settings::default();

        let err = sync(
            &Project::new(home.path(), &dirs, &settings),
            &standard_resolver(&dirs),
            SyncOptions {
                names: &["# only a comment".to_string()],
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(matches!(*err, Error::InvalidArgument { .. }));
    }
}
