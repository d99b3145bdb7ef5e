use clap::Args;
use eyre::Result;
use gitig_merge::{
    NameList,
    ops::{self, SyncOptions},
};
use gitig_templates::{HttpFetcher, sync_resolver};

use super::{AppContext, UnwrapOrExit};
use crate::{
    progress::Progress,
    reports::{OutcomeReport, Report},
};

#[derive(Args)]
pub struct SyncCommand {
    /// Template names as named in github/gitignore (e.g. Python Node)
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Skip local and built-in templates and always use the remote copy
    #[arg(long)]
    pub remote: bool,
}

impl SyncCommand {
    /// Names left to resolve once duplicates and comments are dropped.
    fn template_count(&self) -> usize {
        NameList::normalize(&self.names).names().len()
    }

    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let fetcher = HttpFetcher::new().unwrap_or_exit();
        let resolver = sync_resolver(&ctx.dirs, &ctx.settings, fetcher, self.remote);
        let source = Progress::new(
            resolver,
            self.template_count(),
            ctx.settings.quiet || ctx.dry_run,
        );

        let result = ops::sync(
            &ctx.project(),
            &source,
            SyncOptions {
                names: &self.names,
                dry_run: ctx.dry_run,
            },
        );
        source.finish();
        let outcome = result.unwrap_or_exit();

        OutcomeReport { outcome: &outcome }.render(&mut ctx.output());
        Ok(())
    }
}
