use std::path::PathBuf;

use gitig_core::{AppDirs, Result, Settings};
use gitig_merge::ops::Project;
use gitig_templates::{Resolver, standard_resolver};

use super::GlobalArgs;
use crate::reports::TerminalOutput;

/// Settings and locations shared by every command.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub dirs: AppDirs,
    pub project_dir: PathBuf,
    pub dry_run: bool,
}

impl AppContext {
    /// Read `config.conf` and apply command-line overrides.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let dirs = AppDirs::discover()?;
        let settings = Settings::load(&dirs.config_file())?.with_overrides(args.verbose, args.quiet);

        Ok(Self {
            settings,
            dirs,
            project_dir: args.dir.clone(),
            dry_run: args.dry_run,
        })
    }

    pub fn project(&self) -> Project<'_> {
        Project::new(&self.project_dir, &self.dirs, &self.settings)
    }

    /// Local templates, then built-ins.
    pub fn resolver(&self) -> Resolver {
        standard_resolver(&self.dirs)
    }

    pub fn output(&self) -> TerminalOutput {
        TerminalOutput::new(self.settings.quiet)
    }
}
