use clap::Args;
use eyre::Result;
use gitig_merge::ops;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{AutoReport, Report};

#[derive(Args)]
pub struct AutoCommand {}

impl AutoCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let resolver = ctx.resolver();
        let outcome = ops::auto(&ctx.project(), &resolver, ctx.dry_run).unwrap_or_exit();

        AutoReport { outcome: &outcome }.render(&mut ctx.output());
        Ok(())
    }
}
