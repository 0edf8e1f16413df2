//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Harvest identifiers and report counts
//! - `minify`: Harvest identifiers and assign substitutes to ids and classes
//! - `diff`: Compare two projects or snapshots
//! - `init`: Initialize an idshrink configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) | Some(Command::Minify(cmd)) => cmd.common.verbose,
            Some(Command::Diff(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long, env = "IDSHRINK_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a snapshot is emitted.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Print the snapshot as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Write the JSON snapshot to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct DiffCommand {
    /// Left side: project directory or JSON snapshot
    pub left: PathBuf,

    /// Right side: project directory or JSON snapshot
    pub right: PathBuf,

    /// Print the diff as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Harvest ids, classes, variables and functions with their counts
    Scan(ScanCommand),
    /// Harvest identifiers and assign minimal substitutes to ids and classes
    Minify(ScanCommand),
    /// Compare two projects or snapshots
    Diff(DiffCommand),
    /// Initialize a new .idshrinkrc.json configuration file
    Init,
}
