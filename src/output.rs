//! Result files and JSON rendering.
//!
//! Kept separate from the core so the library can be used without touching
//! the filesystem.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{Category, ClassifiedCandidate};

/// One written category file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFile {
    pub category: Category,
    pub path: PathBuf,
    pub count: usize,
}

/// Bucket the final list by category.
///
/// Buckets iterate in category-name order. Inside a bucket entries are ordered
/// by priority, highest first; equal priorities keep their incoming order.
pub fn group_by_category(
    params: &[ClassifiedCandidate],
) -> BTreeMap<&'static str, Vec<&ClassifiedCandidate>> {
    let mut groups: BTreeMap<&'static str, Vec<&ClassifiedCandidate>> = BTreeMap::new();
    for param in params {
        groups.entry(param.category.as_str()).or_default().push(param);
    }
    for items in groups.values_mut() {
        items.sort_by(|a, b| b.priority.cmp(&a.priority));
    }
    groups
}

/// Count parameters per category, keyed by category name.
pub fn category_counts(params: &[ClassifiedCandidate]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for param in params {
        *counts.entry(param.category.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Write `<category>.txt` for every category present, one name per line.
///
/// Creates `output_dir` if it does not exist.
pub fn save_results_by_category(
    params: &[ClassifiedCandidate],
    output_dir: &Path,
) -> Result<Vec<CategoryFile>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut written = Vec::new();
    for items in group_by_category(params).into_values() {
        let category = items[0].category;
        let path = output_dir.join(format!("{}.txt", category));
        fs::write(&path, names_to_lines(items.iter().map(|p| p.value.as_str())))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        written.push(CategoryFile {
            category,
            path,
            count: items.len(),
        });
    }

    Ok(written)
}

/// Write every name, in final order, to `output_file`.
///
/// Creates the parent directory if it does not exist.
pub fn save_all_results(params: &[ClassifiedCandidate], output_file: &Path) -> Result<()> {
    if let Some(parent) = output_file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(
        output_file,
        names_to_lines(params.iter().map(|p| p.value.as_str())),
    )
    .with_context(|| format!("Failed to write file: {}", output_file.display()))
}

/// Render the final list as a pretty JSON array.
pub fn to_json(params: &[ClassifiedCandidate]) -> Result<String> {
    serde_json::to_string_pretty(params).context("Failed to serialize results.")
}

fn names_to_lines<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.map(|name| format!("{}\n", name)).collect()
}
