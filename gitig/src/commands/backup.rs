use clap::Args;
use eyre::Result;
use gitig_merge::backup;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{BackupsReport, Output, Report};

#[derive(Args)]
pub struct BackupCommand {}

impl BackupCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut out = ctx.output();
        let file = ctx.project().gitignore();

        if ctx.dry_run {
            out.hint(&format!(
                "Would back up {} to {}",
                file.display(),
                ctx.dirs.backup_dir().display()
            ));
            return Ok(());
        }

        let target = backup::create(&ctx.dirs, &file).unwrap_or_exit();
        out.success(&format!("Backed up {}", file.display()));
        out.key_value("Backup", &target.display().to_string());
        Ok(())
    }
}

#[derive(Args)]
pub struct BackupsCommand {}

impl BackupsCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let backups = backup::list(&ctx.dirs).unwrap_or_exit();
        let dir = ctx.dirs.backup_dir();

        BackupsReport {
            backups: &backups,
            dir: &dir,
        }
        .render(&mut ctx.output());
        Ok(())
    }
}
