use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary, SavedFiles};
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{extract_from_directory, extract_from_file},
    output::{save_all_results, save_results_by_category},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;
    let ConfigLoadResult {
        mut config,
        path: config_path,
    } = load_config(&env::current_dir()?)?;

    if verbose {
        match &config_path {
            Some(path) => eprintln!("Using config {}", path.display()),
            None => eprintln!("No config file found, using defaults"),
        }
    }

    if let Some(dir) = &cmd.output_dir {
        config.output_dir = dir.to_string_lossy().into_owned();
    }
    if cmd.recursive {
        config.recursive = true;
    }

    let path = &cmd.path;
    let (params, files_processed, failures, skipped_count) = if path.is_dir() {
        let result = extract_from_directory(path, &config.discover_options(), verbose);
        (
            result.params,
            result.files_processed,
            result.failures,
            result.skipped_count,
        )
    } else if path.is_file() {
        let params = extract_from_file(path)
            .with_context(|| format!("Failed to extract parameters from {}", path.display()))?;
        (params, 1, Vec::new(), 0)
    } else {
        bail!("Path does not exist: {}", path.display());
    };

    let saved = if cmd.no_save {
        None
    } else {
        let output_dir = PathBuf::from(&config.output_dir);
        let category_files = save_results_by_category(&params, &output_dir)?;
        let aggregate_file = output_dir.join(&config.aggregate_file);
        save_all_results(&params, &aggregate_file)?;
        Some(SavedFiles {
            category_files,
            aggregate_file,
        })
    };

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            params,
            files_processed,
            failures,
            skipped_count,
            saved,
        }),
    })
}
