//! The extraction pipeline: scan, classify, deduplicate.

use std::{fs, path::Path};

use super::{
    classify::classify, data::ClassifiedCandidate, dedupe::dedupe, error::ExtractError,
    scanners::scan_all,
};

/// Extract, classify and rank candidate parameter names from script source.
///
/// Returns [`ExtractError::EmptyInput`] for an empty string instead of an
/// empty list. The result holds unique names sorted alphabetically.
///
/// # Examples
///
/// ```
/// use parascan::core::{Category, extract_parameters};
///
/// let params = extract_parameters("fetch(url, { page: 1, pageSize: 10 })").unwrap();
/// assert!(params.iter().all(|p| p.category == Category::Pagination));
/// ```
pub fn extract_parameters(code: &str) -> Result<Vec<ClassifiedCandidate>, ExtractError> {
    if code.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let candidates = scan_all(code);
    Ok(dedupe(classify(candidates)))
}

/// Read a whole file as UTF-8 and run [`extract_parameters`] on it.
pub fn extract_from_file(path: &Path) -> Result<Vec<ClassifiedCandidate>, ExtractError> {
    let code = fs::read_to_string(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    extract_parameters(&code)
}
