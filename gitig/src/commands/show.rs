use clap::Args;
use eyre::Result;
use gitig_merge::ops;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{Report, TemplateReport};

#[derive(Args)]
pub struct ShowCommand {
    /// Template name
    pub name: String,
}

impl ShowCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let template = ops::show(&ctx.dirs, &self.name).unwrap_or_exit();
        tracing::debug!(name = %self.name, origin = %template.origin(), "showing template");

        TemplateReport {
            template: &template,
        }
        .render(&mut ctx.output());
        Ok(())
    }
}
