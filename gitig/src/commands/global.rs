use clap::{Args, Subcommand};
use eyre::Result;
use gitig_merge::ops;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{GlobalInitReport, OutcomeReport, Output, Report};

#[derive(Args)]
pub struct GlobalCommand {
    #[command(subcommand)]
    action: GlobalAction,
}

#[derive(Subcommand)]
enum GlobalAction {
    /// Create ~/.gitignore_global with patterns for this OS
    Init,

    /// Merge templates into ~/.gitignore_global
    Add {
        /// Template names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

impl GlobalCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut out = ctx.output();
        match &self.action {
            GlobalAction::Init => {
                if ctx.dry_run {
                    let path = ctx.dirs.global_gitignore();
                    out.hint(&format!("Would create {} if missing", path.display()));
                    return Ok(());
                }
                let init = ops::global_init(&ctx.dirs).unwrap_or_exit();
                GlobalInitReport { init: &init }.render(&mut out);
            }
            GlobalAction::Add { names } => {
                let resolver = ctx.resolver();
                let outcome =
                    ops::global_add(&ctx.dirs, &ctx.settings, &resolver, names, ctx.dry_run)
                        .unwrap_or_exit();
                OutcomeReport { outcome: &outcome }.render(&mut out);
            }
        }
        Ok(())
    }
}
