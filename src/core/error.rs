use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors returned by the single-input extraction entry points.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source text is empty; nothing is scanned.
    #[error("source text is empty")]
    EmptyInput,

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
