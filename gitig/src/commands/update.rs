use clap::Args;
use eyre::Result;
use gitig_merge::{
    MergeStrategy,
    ops::{self, UpdateOptions},
};

use super::{AppContext, UnwrapOrExit};
use crate::reports::{OutcomeReport, Report};

#[derive(Args)]
pub struct AppendCommand {
    /// Template names to append
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl AppendCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        run_update(ctx, &self.names, MergeStrategy::Append)
    }
}

#[derive(Args)]
pub struct UpdateCommand {
    /// Template names to merge
    #[arg(required = true)]
    pub names: Vec<String>,
}

impl UpdateCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        run_update(ctx, &self.names, MergeStrategy::Smart)
    }
}

fn run_update(ctx: &AppContext, names: &[String], strategy: MergeStrategy) -> Result<()> {
    let resolver = ctx.resolver();
    let outcome = ops::update(
        &ctx.project(),
        &resolver,
        UpdateOptions {
            names,
            strategy,
            dry_run: ctx.dry_run,
        },
    )
    .unwrap_or_exit();

    OutcomeReport { outcome: &outcome }.render(&mut ctx.output());
    Ok(())
}
