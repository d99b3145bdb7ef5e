use std::io;

use clap::{Args, CommandFactory};
use eyre::Result;

use super::{AppContext, Cli};

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: clap_complete::Shell,
}

impl CompletionsCommand {
    pub fn run(&self, _ctx: &AppContext) -> Result<()> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.shell, &mut cmd, "gitig", &mut io::stdout());
        Ok(())
    }
}
