use clap::Args;
use eyre::Result;
use gitig_merge::ops::{self, InitOptions};

use super::{AppContext, UnwrapOrExit};
use crate::reports::{OutcomeReport, Report};

#[derive(Args)]
pub struct InitCommand {
    /// Template names (e.g. python node vscode)
    pub names: Vec<String>,
}

impl InitCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let resolver = ctx.resolver();
        let outcome = ops::init(
            &ctx.project(),
            &resolver,
            InitOptions {
                names: &self.names,
                dry_run: ctx.dry_run,
            },
        )
        .unwrap_or_exit();

        OutcomeReport { outcome: &outcome }.render(&mut ctx.output());
        Ok(())
    }
}
