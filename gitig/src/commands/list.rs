use clap::Args;
use eyre::Result;
use gitig_merge::ops::{self, ListOptions};

use super::{AppContext, UnwrapOrExit};
use crate::reports::{ListReport, Report};

#[derive(Args)]
pub struct ListCommand {
    /// Only show templates whose name contains this text
    pub filter: Option<String>,

    /// Only show local templates
    #[arg(long)]
    pub local: bool,

    /// Only show built-in templates
    #[arg(long)]
    pub builtin: bool,
}

impl ListCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let listing = ops::list(
            &ctx.dirs,
            ListOptions {
                filter: self.filter.as_deref(),
                local: self.local,
                builtin: self.builtin,
            },
        )
        .unwrap_or_exit();

        ListReport { listing: &listing }.render(&mut ctx.output());
        Ok(())
    }
}
