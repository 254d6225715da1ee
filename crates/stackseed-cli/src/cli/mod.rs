//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stackseed_adapters::blueprint::DEFAULT_PROJECT_DIR;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackseed",
    bin_name = "stackseed",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} One-shot multi-tier web application setup",
    long_about = "stackseed lays out a React client, a Node server and a Python ML \
                  service, provisions cloud and infrastructure config from a YAML \
                  setup file, and bootstraps the package managers.",
    after_help = "EXAMPLES:\n\
        \x20 stackseed init\n\
        \x20 stackseed check\n\
        \x20 stackseed new my-estate --yes\n\
        \x20 stackseed new --files-only --output-format json\n\
        \x20 stackseed completions bash > /usr/share/bash-completion/completions/stackseed",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full setup: scaffold, provision, bootstrap.
    #[command(
        visible_alias = "n",
        about = "Create and provision a new project",
        after_help = "EXAMPLES:\n\
            \x20 stackseed new\n\
            \x20 stackseed new my-estate --skip-bootstrap\n\
            \x20 stackseed new my-estate --files-only --yes\n\
            \x20 stackseed new my-estate --dry-run"
    )]
    New(NewArgs),

    /// Validate the setup file without touching the disk.
    #[command(
        about = "Validate the setup file",
        after_help = "EXAMPLES:\n\
            \x20 stackseed check\n\
            \x20 stackseed check --tools\n\
            \x20 stackseed -c ./prod.yaml check --output-format json"
    )]
    Check(CheckArgs),

    /// Write a sample setup file.
    #[command(
        about = "Write a sample setup file",
        after_help = "EXAMPLES:\n\
            \x20 stackseed init                 # ./stackseed.yaml\n\
            \x20 stackseed init --path prod.yaml\n\
            \x20 stackseed init --force         # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackseed completions bash > ~/.local/share/bash-completion/completions/stackseed\n\
            \x20 stackseed completions zsh  > ~/.zfunc/_stackseed\n\
            \x20 stackseed completions fish > ~/.config/fish/completions/stackseed.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `stackseed new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project directory.  The last path component must be a usable name.
    #[arg(
        value_name = "DIR",
        default_value = DEFAULT_PROJECT_DIR,
        help = "Project directory"
    )]
    pub dir: PathBuf,

    /// Skip the package-manager and git commands.
    #[arg(long = "skip-bootstrap", help = "Do not run bootstrap commands")]
    pub skip_bootstrap: bool,

    /// Skip every provisioning step.
    #[arg(long = "skip-provision", help = "Do not run provisioning steps")]
    pub skip_provision: bool,

    /// Write files only; no external program is started.
    #[arg(long = "files-only", help = "Write files without running any command")]
    pub files_only: bool,

    /// Print the plan without writing files or running commands.
    #[arg(long = "dry-run", help = "Show what would happen without doing it")]
    pub dry_run: bool,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and run immediately")]
    pub yes: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `stackseed check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Also probe for the external programs setup relies on.
    #[arg(long = "tools", help = "Check that aws, certbot, npm, python and git are installed")]
    pub tools: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackseed init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the sample file (default `./stackseed.yaml`).
    #[arg(long = "path", value_name = "FILE", help = "Output path for the setup file")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing setup file.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing setup file")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackseed completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
