use clap::Args;
use dialoguer::{Confirm, MultiSelect, theme::ColorfulTheme};
use eyre::{Context, Result};
use gitig_merge::ops::{self, InitOptions};
use gitig_templates::builtin;

use super::{AppContext, UnwrapOrExit};
use crate::reports::{OutcomeReport, Output, Report};

#[derive(Args)]
pub struct InteractiveCommand {}

impl InteractiveCommand {
    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let names = Self::prompt_templates()?;
        let mut out = ctx.output();
        if names.is_empty() {
            out.hint("No templates selected");
            return Ok(());
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Generate .gitignore with {}?", names.join(", ")))
            .default(true)
            .interact()
            .wrap_err("Failed to read confirmation")?;
        if !confirmed {
            out.hint("Cancelled");
            return Ok(());
        }

        let resolver = ctx.resolver();
        let outcome = ops::init(
            &ctx.project(),
            &resolver,
            InitOptions {
                names: &names,
                dry_run: ctx.dry_run,
            },
        )
        .unwrap_or_exit();

        OutcomeReport { outcome: &outcome }.render(&mut out);
        Ok(())
    }

    fn prompt_templates() -> Result<Vec<String>> {
        let choices: Vec<&str> = builtin::names().collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select templates (space to toggle, enter to confirm)")
            .items(&choices)
            .interact()
            .wrap_err("Failed to get template selection")?;

        Ok(selected
            .into_iter()
            .map(|i| choices[i].to_string())
            .collect())
    }
}
