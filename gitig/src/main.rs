mod commands;
mod progress;
mod reports;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::{AppContext, Cli, UnwrapOrExit};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse().absorb_trailing_flags();
    let ctx = AppContext::load(cli.global());
    // Without settings the flags alone pick the level.
    match &ctx {
        Ok(ctx) => init_tracing(ctx.settings.verbose, ctx.settings.quiet),
        Err(_) => init_tracing(cli.global().verbose, cli.global().quiet),
    }
    let ctx = ctx.unwrap_or_exit();
    console::set_colors_enabled(ctx.settings.use_color);
    console::set_colors_enabled_stderr(ctx.settings.use_color);

    cli.run(&ctx)
}

/// Warnings by default, debug with `--verbose`, errors only with `--quiet`.
/// `RUST_LOG` takes precedence when set.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
