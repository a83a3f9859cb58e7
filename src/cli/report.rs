//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow parascan to be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, ExtractSummary, InitSummary, SavedFiles};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ClassifiedCandidate;
use crate::output::{category_counts, to_json};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose),
        CommandSummary::Init(summary) => {
            print_init(summary);
            Ok(())
        }
    }
}

fn print_extract(summary: &ExtractSummary, verbose: bool) -> Result<()> {
    match &summary.saved {
        Some(saved) => {
            let mut out = io::stdout().lock();
            print_extract_summary_to(summary, &mut out);
            if verbose {
                print_params_table_to(&summary.params, &mut out);
            }
            print_saved_to(saved, summary.params.len(), &mut out);
        }
        None => {
            // stdout carries only the JSON so it can be piped.
            let mut err = io::stderr().lock();
            print_extract_summary_to(summary, &mut err);
            if verbose {
                print_params_table_to(&summary.params, &mut err);
            }
            println!("{}", to_json(&summary.params)?);
        }
    }

    let mut err = io::stderr().lock();
    print_failure_warning_to(summary.failures.len(), &mut err);
    if verbose {
        print_skipped_warning_to(summary.skipped_count, &mut err);
    }
    Ok(())
}

/// Print the total and the per-category counts.
pub fn print_extract_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let total = summary.params.len();
    let _ = writeln!(
        writer,
        "Extracted {} unique {} from {} {}",
        total.to_string().bold(),
        if total == 1 { "parameter" } else { "parameters" },
        summary.files_processed,
        if summary.files_processed == 1 {
            "file"
        } else {
            "files"
        }
    );

    let counts = category_counts(&summary.params);
    let width = counts.keys().map(|c| c.width()).max().unwrap_or(0);
    for (category, count) in counts {
        let _ = writeln!(
            writer,
            "  {}{}  {}",
            category.cyan(),
            " ".repeat(width - category.width()),
            count
        );
    }
}

/// Print every parameter with its category, priority and tags.
pub fn print_params_table_to<W: Write>(params: &[ClassifiedCandidate], writer: &mut W) {
    if params.is_empty() {
        return;
    }

    let name_width = params.iter().map(|p| p.value.width()).max().unwrap_or(0);
    let _ = writeln!(writer);
    for param in params {
        let tags: Vec<&str> = param.tags.iter().map(String::as_str).collect();
        let _ = writeln!(
            writer,
            "  {}{}  {:<14} {}  {}",
            param.value,
            " ".repeat(name_width - param.value.width()),
            param.category.as_str(),
            param.priority,
            tags.join(",").dimmed()
        );
    }
    let _ = writeln!(writer);
}

/// Print one line per written result file.
pub fn print_saved_to<W: Write>(saved: &SavedFiles, total: usize, writer: &mut W) {
    for file in &saved.category_files {
        let _ = writeln!(
            writer,
            "{} Saved {} ({}) to {}",
            SUCCESS_MARK.green(),
            file.category,
            file.count,
            file.path.display()
        );
    }
    let _ = writeln!(
        writer,
        "{} Saved all results ({}) to {}",
        SUCCESS_MARK.green(),
        total,
        saved.aggregate_file.display()
    );
}

/// Print a warning about files that could not be processed.
pub fn print_failure_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be processed",
            "warning:".bold().yellow(),
            count,
            if count == 1 { "file" } else { "files" }
        );
    }
}

/// Print how many entries the recursive walk could not access.
pub fn print_skipped_warning_to<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be accessed and {} skipped",
            "warning:".bold().yellow(),
            count,
            if count == 1 { "path" } else { "paths" },
            if count == 1 { "was" } else { "were" }
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            summary.path.display()
        );
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Category, SourceTag};
    use crate::output::CategoryFile;

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn param(value: &str, category: Category, priority: u8, tags: &[&str]) -> ClassifiedCandidate {
        ClassifiedCandidate {
            value: value.to_string(),
            source: SourceTag::ObjectProperty,
            category,
            priority,
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    fn summary(params: Vec<ClassifiedCandidate>, files_processed: usize) -> ExtractSummary {
        ExtractSummary {
            params,
            files_processed,
            failures: Vec::new(),
            skipped_count: 0,
            saved: None,
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>)>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        strip_ansi(&String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_extract_summary() {
        let summary = summary(
            vec![
                param("apiKey", Category::Authentication, 5, &["auth"]),
                param("method", Category::General, 1, &[]),
                param("userId", Category::Identifier, 4, &["id"]),
            ],
            2,
        );

        let output = render(|w| print_extract_summary_to(&summary, w));
        assert_eq!(
            output,
            "Extracted 3 unique parameters from 2 files\n  \
             authentication  1\n  \
             general         1\n  \
             identifier      1\n"
        );
    }

    #[test]
    fn test_extract_summary_singular() {
        let summary = summary(vec![param("page", Category::Pagination, 2, &["pagination"])], 1);
        let output = render(|w| print_extract_summary_to(&summary, w));
        assert!(output.starts_with("Extracted 1 unique parameter from 1 file\n"));
    }

    #[test]
    fn test_extract_summary_empty() {
        let summary = summary(Vec::new(), 0);
        let output = render(|w| print_extract_summary_to(&summary, w));
        assert_eq!(output, "Extracted 0 unique parameters from 0 files\n");
    }

    #[test]
    fn test_params_table() {
        let params = vec![
            param("pageSize", Category::Pagination, 3, &["api", "pagination"]),
            param("sort", Category::General, 1, &[]),
        ];
        let output = render(|w| print_params_table_to(&params, w));
        assert!(output.contains("  pageSize  pagination     3  api,pagination\n"));
        assert!(output.contains("  sort      general        1  \n"));
    }

    #[test]
    fn test_saved_files() {
        let saved = SavedFiles {
            category_files: vec![CategoryFile {
                category: Category::Identifier,
                path: PathBuf::from("results/identifier.txt"),
                count: 2,
            }],
            aggregate_file: PathBuf::from("results/all_results_all.txt"),
        };
        let output = render(|w| print_saved_to(&saved, 2, w));
        assert_eq!(
            output,
            "\u{2713} Saved identifier (2) to results/identifier.txt\n\
             \u{2713} Saved all results (2) to results/all_results_all.txt\n"
        );
    }

    #[test]
    fn test_failure_warning() {
        assert_eq!(render(|w| print_failure_warning_to(0, w)), "");
        assert_eq!(
            render(|w| print_failure_warning_to(2, w)),
            "warning: 2 files could not be processed\n"
        );
    }

    #[test]
    fn test_skipped_warning() {
        assert_eq!(render(|w| print_skipped_warning_to(0, w)), "");
        assert_eq!(
            render(|w| print_skipped_warning_to(1, w)),
            "warning: 1 path could not be accessed and was skipped\n"
        );
        assert_eq!(
            render(|w| print_skipped_warning_to(3, w)),
            "warning: 3 paths could not be accessed and were skipped\n"
        );
    }
}
