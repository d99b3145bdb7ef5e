use eyre::Result;
use gitig_merge::ops::{self, PatternsOptions};

use super::{AppContext, UnwrapOrExit};
use crate::reports::{PatternsReport, Report};

/// Patterns given as bare arguments or with `--add`.
pub struct PatternsCommand<'a> {
    patterns: &'a [String],
}

impl<'a> PatternsCommand<'a> {
    pub fn new(patterns: &'a [String]) -> Self {
        Self { patterns }
    }

    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let outcome = ops::add_patterns(
            &ctx.project(),
            PatternsOptions {
                patterns: self.patterns,
                dry_run: ctx.dry_run,
            },
        )
        .unwrap_or_exit();

        PatternsReport { outcome: &outcome }.render(&mut ctx.output());
        Ok(())
    }
}
