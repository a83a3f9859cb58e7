use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{ClassifiedCandidate, FileFailure};
use crate::output::CategoryFile;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Init(InitSummary),
}

/// Files written by an extract run.
#[derive(Debug)]
pub struct SavedFiles {
    pub category_files: Vec<CategoryFile>,
    pub aggregate_file: PathBuf,
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Final list: unique names, sorted alphabetically.
    pub params: Vec<ClassifiedCandidate>,
    pub files_processed: usize,
    pub failures: Vec<FileFailure>,
    /// Entries that could not be accessed during a recursive walk.
    pub skipped_count: usize,
    /// `None` when `--no-save` was given.
    pub saved: Option<SavedFiles>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
    /// False if a config file already existed.
    pub created: bool,
}

/// Result of running a parascan command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Extract(summary) if !summary.failures.is_empty() => {
                ExitStatus::Failure
            }
            CommandSummary::Init(summary) if !summary.created => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}
