//! In-place removal of a duplicated section from a file on disk

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::splice::{remove_block, BlockMarkers, BlockSpan};

#[derive(Error, Debug)]
pub enum FixError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a fix attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// Section located and cut; the file was rewritten
    Removed(BlockSpan),
    /// No matching section; the file was left untouched
    NotFound,
}

/// Remove the first section matching `markers` from the file at `path`.
///
/// The file is rewritten in place only when a section is found; on a miss it
/// is never reopened for writing. A marker miss is an in-band [`FixOutcome`],
/// not an error — only filesystem failures (missing file, permissions,
/// non-UTF-8 content) surface as [`FixError`].
pub fn remove_duplicate_block(
    path: &Path,
    markers: &BlockMarkers,
) -> Result<FixOutcome, FixError> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match remove_block(&content, markers) {
        Some((updated, span)) => {
            fs::write(path, updated).map_err(|source| FixError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::info!(
                path = %path.display(),
                start_line = span.start + 1,
                end_line = span.end + 1,
                "Removed duplicate section"
            );
            Ok(FixOutcome::Removed(span))
        }
        None => {
            tracing::debug!(path = %path.display(), "No matching section found");
            Ok(FixOutcome::NotFound)
        }
    }
}
