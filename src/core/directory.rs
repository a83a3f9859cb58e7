//! Directory-level extraction.
//!
//! Files are discovered, sorted by path, extracted in parallel, and merged
//! in discovery order so that first-seen-wins deduplication is deterministic.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{MatchOptions, Pattern, glob_with};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::{data::ClassifiedCandidate, dedupe::dedupe, pipeline::extract_from_file};

/// Which files of a directory are scanned.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Extensions without the leading dot, e.g. `js`.
    pub extensions: Vec<String>,
    /// Glob patterns matched against the full path of each candidate file.
    pub ignores: Vec<String>,
    /// Descend into sub-directories instead of listing only the top level.
    pub recursive: bool,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            extensions: vec!["js".to_string()],
            ignores: Vec::new(),
            recursive: false,
        }
    }
}

/// Result of discovering files.
pub struct DiscoverResult {
    /// Matching files, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed during a recursive walk.
    pub skipped_count: usize,
}

/// A file that could not be read or extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Merged result of extracting every file of a directory.
#[derive(Debug, Default)]
pub struct DirectoryExtraction {
    /// Unique names across all files, sorted alphabetically.
    pub params: Vec<ClassifiedCandidate>,
    /// Number of files that were discovered and attempted.
    pub files_processed: usize,
    /// Files that contributed nothing because reading or extraction failed.
    pub failures: Vec<FileFailure>,
    pub skipped_count: usize,
}

pub fn discover_files(dir: &Path, options: &DiscoverOptions, verbose: bool) -> DiscoverResult {
    let ignore_patterns: Vec<Pattern> = options
        .ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    let (mut files, skipped_count) = if options.recursive {
        walk_files(dir, &options.extensions, verbose)
    } else {
        (list_files(dir, &options.extensions, verbose), 0)
    };

    files.retain(|path| {
        let path_str = path.to_string_lossy();
        !ignore_patterns.iter().any(|p| p.matches(&path_str))
    });
    files.sort();
    files.dedup();

    DiscoverResult {
        files,
        skipped_count,
    }
}

/// Top-level files only: `<dir>/*.<ext>`, hidden files excluded.
fn list_files(dir: &Path, extensions: &[String], verbose: bool) -> Vec<PathBuf> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let base = Pattern::escape(&dir.to_string_lossy());
    let mut files = Vec::new();

    for ext in extensions {
        let pattern = format!("{}/*.{}", base.trim_end_matches('/'), ext);
        match glob_with(&pattern, options) {
            Ok(entries) => files.extend(entries.flatten().filter(|p| p.is_file())),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid glob pattern '{}': {}",
                        "warning:".bold().yellow(),
                        pattern,
                        e
                    );
                }
            }
        }
    }

    files
}

fn walk_files(dir: &Path, extensions: &[String], verbose: bool) -> (Vec<PathBuf>, usize) {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && has_extension(path, extensions) {
            files.push(path.to_path_buf());
        }
    }

    (files, skipped_count)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.iter().any(|ext| ext == e))
}

/// Extract parameters from every matching file of `dir`.
///
/// A failure in one file is reported as a warning and recorded in
/// [`DirectoryExtraction::failures`]; the remaining files are still processed.
pub fn extract_from_directory(
    dir: &Path,
    options: &DiscoverOptions,
    verbose: bool,
) -> DirectoryExtraction {
    let DiscoverResult {
        files,
        skipped_count,
    } = discover_files(dir, options, verbose);

    if files.is_empty() {
        eprintln!(
            "{} No matching files found in {}",
            "warning:".bold().yellow(),
            dir.display()
        );
        return DirectoryExtraction {
            skipped_count,
            ..Default::default()
        };
    }

    if verbose {
        eprintln!("Found {} file(s) in {}", files.len(), dir.display());
    }

    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, extract_from_file(path)))
        .collect();

    let mut merged = Vec::new();
    let mut failures = Vec::new();

    for (path, result) in results {
        match result {
            Ok(params) => {
                if verbose {
                    eprintln!(
                        "Processed {}: {} parameter(s)",
                        display_name(path),
                        params.len()
                    );
                }
                merged.extend(params);
            }
            Err(e) => {
                let message = match e.source() {
                    Some(cause) => format!("{}: {}", e, cause),
                    None => e.to_string(),
                };
                eprintln!(
                    "{} Failed to process {}: {}",
                    "warning:".bold().yellow(),
                    display_name(path),
                    message
                );
                failures.push(FileFailure {
                    path: path.clone(),
                    message,
                });
            }
        }
    }

    DirectoryExtraction {
        params: dedupe(merged),
        files_processed: files.len(),
        failures,
        skipped_count,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
