//! Core extraction engine.
//!
//! Raw text flows through four stages:
//!
//! 1. **Scan**: nine independent pattern scanners propose `(name, source)`
//!    candidates ([`scanners`]), each gated by [`validate`].
//! 2. **Classify**: keyword rules assign category, priority and tags
//!    ([`classify`]); the list is ordered by priority, highest first.
//! 3. **Deduplicate**: the first occurrence of each name survives
//!    ([`dedupe`]).
//! 4. **Order**: the unique list is sorted alphabetically.
//!
//! [`directory`] runs the pipeline over many files and merges the results.

pub mod classify;
pub mod data;
pub mod dedupe;
pub mod directory;
pub mod error;
pub mod pipeline;
pub mod scanners;
pub mod validate;

pub use classify::{classify, classify_candidate};
pub use data::{Candidate, Category, ClassifiedCandidate, SourceTag};
pub use dedupe::dedupe;
pub use directory::{
    DirectoryExtraction, DiscoverOptions, DiscoverResult, FileFailure, discover_files,
    extract_from_directory,
};
pub use error::ExtractError;
pub use pipeline::{extract_from_file, extract_parameters};
pub use validate::{is_common_variable, is_valid_name};
