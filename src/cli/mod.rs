//! Command-line interface layer.
//!
//! Parses arguments, runs the requested command, prints its report and maps
//! the outcome to an exit status.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, ExtractCommand};
pub use commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, SavedFiles};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose)?;

    Ok(result.exit_status())
}
