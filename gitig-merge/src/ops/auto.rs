//! Auto operation - init from templates detected in the project directory.

use gitig_core::Result;
use gitig_templates::TemplateSource;

use super::{InitOptions, Outcome, Project, init};
use crate::detect::detect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoOutcome {
    pub detected: Vec<&'static str>,
    pub init: Outcome,
}

/// Detect project types and run init with the matching templates.
pub fn auto(project: &Project, source: &dyn TemplateSource, dry_run: bool) -> Result<AutoOutcome> {
    let detected = detect(project.dir)?;
    let names: Vec<String> = detected.iter().map(|s| s.to_string()).collect();
    let init = init(
        project,
        source,
        InitOptions {
            names: &names,
            dry_run,
        },
    )?;
    Ok(AutoOutcome { detected, init })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gitig_core::{AppDirs, GITIGNORE, Settings};
    use gitig_templates::standard_resolver;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detected_templates_are_merged() {
        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let settings = Settings::default();
        fs::write(dir.path().join("Cargo.toml"), "").unwrap();

        let outcome = auto(
            &Project::new(dir.path(), &dirs, &settings),
            &standard_resolver(&dirs),
            false,
        )
        .unwrap();

        assert_eq!(outcome.detected[0], "rust");
        let content = fs::read_to_string(dir.path().join(GITIGNORE)).unwrap();
        assert!(content.contains("# ===== rust =====\n"));
    }

    #[test]
    fn test_dry_run_only_reports() {
        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        let dirs = AppDirs::from_home(home.path());
        let settings = Settings::default();
        fs::write(dir.path().join("go.mod"), "").unwrap();

        let outcome = auto(
            &Project::new(dir.path(), &dirs, &settings),
            &standard_resolver(&dirs),
            true,
        )
        .unwrap();

        assert!(outcome.init.is_dry_run());
        assert!(outcome.detected.contains(&"go"));
        assert!(!dir.path().join(GITIGNORE).exists());
    }
}
