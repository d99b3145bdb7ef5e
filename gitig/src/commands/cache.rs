use clap::{Args, Subcommand};
use eyre::Result;
use gitig_merge::ops;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{CacheClearReport, Output, Report};

#[derive(Args)]
pub struct CacheCommand {
    #[command(subcommand)]
    action: CacheAction,
}

#[derive(Subcommand)]
enum CacheAction {
    /// Delete every downloaded template
    Clear,
}

impl CacheCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let mut out = ctx.output();
        match self.action {
            CacheAction::Clear => {
                if ctx.dry_run {
                    out.hint(&format!("Would clear {}", ctx.dirs.cache_dir().display()));
                    return Ok(());
                }
                let removed = ops::clear_cache(&ctx.dirs).unwrap_or_exit();
                CacheClearReport { removed }.render(&mut out);
            }
        }
        Ok(())
    }
}
