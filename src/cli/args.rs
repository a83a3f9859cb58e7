//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract candidate API parameters from a file or directory
//! - `init`: Initialize parascan configuration file

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
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// JavaScript file, or directory containing JavaScript files
    pub path: PathBuf,

    /// Output directory for result files (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print results as JSON instead of writing result files
    #[arg(long)]
    pub no_save: bool,

    /// Scan sub-directories as well (overrides config file)
    #[arg(long)]
    pub recursive: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract candidate API parameter names from JavaScript sources
    Extract(ExtractCommand),
    /// Initialize a new .parascanrc.json configuration file
    Init,
}
