use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI entry point for the DFHack hack manager.
#[derive(Parser, Debug)]
#[command(
    name = "lnp-hacks",
    about = "Manage DFHack hacks and init files for a Dwarf Fortress launcher",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Launcher root holding hacks.toml and user.toml (default: current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Dwarf Fortress directory (default: <root>/df)
    #[arg(long, global = true)]
    pub df: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List hacks with their configured and on-disk state
    List(ListOpts),
    /// Show one hack
    Show(HackOpts),
    /// Toggle a hack and rebuild its init file
    Toggle(HackOpts),
    /// Enable a hack and rebuild its init file
    Enable(HackOpts),
    /// Disable a hack and rebuild its init file
    Disable(HackOpts),
    /// Regenerate all init files from hacks.toml
    Rebuild,
    /// Inspect or toggle the global DFHack switch
    Engine(EngineOpts),
    /// Open the DFHack documentation
    Docs,
    /// Print version information
    Version,
}

impl Command {
    /// Subcommand name, used to name the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Show(_) => "show",
            Self::Toggle(_) => "toggle",
            Self::Enable(_) => "enable",
            Self::Disable(_) => "disable",
            Self::Rebuild => "rebuild",
            Self::Engine(_) => "engine",
            Self::Docs => "docs",
            Self::Version => "version",
        }
    }
}

/// Options for the `list` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct ListOpts {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Options for subcommands that address a single hack.
#[derive(Parser, Debug, Clone)]
pub struct HackOpts {
    /// Hack name as configured in hacks.toml
    pub name: String,
}

/// Options for the `engine` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct EngineOpts {
    #[command(subcommand)]
    pub action: Option<EngineAction>,
}

/// Engine switch actions; `status` when omitted.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAction {
    /// Print whether DFHack is enabled
    Status,
    /// Flip the global DFHack switch
    Toggle,
}
