mod add;
mod auto;
mod backup;
mod cache;
mod completions;
mod context;
mod global;
mod init;
mod interactive;
mod list;
mod restore;
mod show;
mod sync;
mod update;

use std::path::PathBuf;

use add::PatternsCommand;
use auto::AutoCommand;
use backup::{BackupCommand, BackupsCommand};
use cache::CacheCommand;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use completions::CompletionsCommand;
pub(crate) use context::AppContext;
use eyre::Result;
use global::GlobalCommand;
use init::InitCommand;
use interactive::InteractiveCommand;
use list::ListCommand;
use restore::RestoreCommand;
use show::ShowCommand;
use sync::SyncCommand;
use update::{AppendCommand, UpdateCommand};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gitig_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(code = e.code(), "command failed");
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gitig")]
#[command(version, disable_version_flag = true)]
#[command(about = "Generate and merge .gitignore files from templates")]
#[command(after_help = "Bare arguments that are not commands are added as patterns: \
                        gitig node_modules/ '*.log'")]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    /// Add patterns, even ones named like a command
    #[arg(short = 'a', long = "add", value_name = "PATTERN", num_args = 1..)]
    add: Vec<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags accepted before or after any command.
#[derive(Args, Debug, Clone)]
pub(crate) struct GlobalArgs {
    /// Show what would change without writing anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show debug output
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project directory containing the .gitignore
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    pub fn global(&self) -> &GlobalArgs {
        &self.global
    }

    /// Bare patterns swallow every argument after the first, so pick the
    /// boolean global flags back out of them.
    pub fn absorb_trailing_flags(mut self) -> Self {
        if let Some(Commands::Patterns(args)) = &mut self.command {
            args.retain(|arg| match arg.as_str() {
                "--dry-run" => {
                    self.global.dry_run = true;
                    false
                }
                "-V" | "--verbose" => {
                    self.global.verbose = true;
                    false
                }
                "-q" | "--quiet" => {
                    self.global.quiet = true;
                    false
                }
                _ => true,
            });
        }
        self
    }

    pub fn run(&self, ctx: &AppContext) -> Result<()> {
        let Some(command) = &self.command else {
            if self.add.is_empty() {
                Cli::command().print_help()?;
                return Ok(());
            }
            return PatternsCommand::new(&self.add).run(ctx);
        };

        match command {
            Commands::Init(cmd) => cmd.run(ctx),
            Commands::Append(cmd) => cmd.run(ctx),
            Commands::Update(cmd) => cmd.run(ctx),
            Commands::Sync(cmd) => cmd.run(ctx),
            Commands::List(cmd) => cmd.run(ctx),
            Commands::Show(cmd) => cmd.run(ctx),
            Commands::Auto(cmd) => cmd.run(ctx),
            Commands::Interactive(cmd) => cmd.run(ctx),
            Commands::Global(cmd) => cmd.run(ctx),
            Commands::Backup(cmd) => cmd.run(ctx),
            Commands::Restore(cmd) => cmd.run(ctx),
            Commands::Backups(cmd) => cmd.run(ctx),
            Commands::Cache(cmd) => cmd.run(ctx),
            Commands::Completions(cmd) => cmd.run(ctx),
            Commands::Patterns(args) => PatternsCommand::new(args).run(ctx),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create .gitignore from templates, or merge them into an existing one
    Init(InitCommand),

    /// Append templates to .gitignore without removing duplicates
    Append(AppendCommand),

    /// Merge templates into .gitignore, skipping patterns already present
    Update(UpdateCommand),

    /// Merge templates, downloading from github/gitignore when needed
    Sync(SyncCommand),

    /// List local and built-in templates
    List(ListCommand),

    /// Print a template
    #[command(alias = "cat")]
    Show(ShowCommand),

    /// Detect the project type and generate a matching .gitignore
    Auto(AutoCommand),

    /// Pick templates from a menu
    #[command(alias = "tui")]
    Interactive(InteractiveCommand),

    /// Manage ~/.gitignore_global
    Global(GlobalCommand),

    /// Back up the project's .gitignore
    Backup(BackupCommand),

    /// Restore .gitignore from a backup
    Restore(RestoreCommand),

    /// List backups
    #[command(alias = "history")]
    Backups(BackupsCommand),

    /// Manage the download cache
    Cache(CacheCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),

    #[command(external_subcommand)]
    Patterns(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gitig").chain(args.iter().copied()))
            .unwrap()
            .absorb_trailing_flags()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_patterns_become_pattern_command() {
        let cli = parse(&["node_modules/", "*.log", "--dry-run"]);

        assert!(cli.global.dry_run);
        let Some(Commands::Patterns(args)) = cli.command else {
            panic!("expected bare patterns");
        };
        assert_eq!(args, ["node_modules/", "*.log"]);
    }

    #[test]
    fn test_add_flag_accepts_command_names() {
        let cli = parse(&["-a", "init", "list"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.add, ["init", "list"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["update", "rust", "-V", "-C", "/tmp/project"]);

        assert!(cli.global.verbose);
        assert_eq!(cli.global.dir, PathBuf::from("/tmp/project"));
        assert!(matches!(cli.command, Some(Commands::Update(_))));
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(parse(&["cat", "rust"]).command, Some(Commands::Show(_))));
        assert!(matches!(parse(&["history"]).command, Some(Commands::Backups(_))));
        assert!(matches!(parse(&["tui"]).command, Some(Commands::Interactive(_))));
    }
}
