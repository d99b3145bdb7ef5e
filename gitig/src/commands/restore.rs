use clap::Args;
use eyre::Result;
use gitig_merge::backup;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{BackupsReport, Output, Report};

#[derive(Args)]
pub struct RestoreCommand {
    /// Backup file name; lists the backups when omitted
    pub name: Option<String>,
}

impl RestoreCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut out = ctx.output();

        let Some(name) = &self.name else {
            let backups = backup::list(&ctx.dirs).unwrap_or_exit();
            let dir = ctx.dirs.backup_dir();
            BackupsReport {
                backups: &backups,
                dir: &dir,
            }
            .render(&mut out);
            return Ok(());
        };

        let target = ctx.project().gitignore();
        if ctx.dry_run {
            out.hint(&format!("Would restore {name} to {}", target.display()));
            return Ok(());
        }

        backup::restore(&ctx.dirs, name, &target).unwrap_or_exit();
        out.success(&format!("Restored {} from {name}", target.display()));
        Ok(())
    }
}
