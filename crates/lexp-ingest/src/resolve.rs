//! Input file lookup relative to the data directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// File read when no `--input` is given.
pub const DEFAULT_INPUT_FILE: &str = "eu_life_expectancy_raw.tsv";

/// Resolves the input path.
///
/// Candidates, first existing wins:
/// 1. `input` as given
/// 2. `<data_dir>/<input>`
/// 3. `<data_dir>/<file name of input>`
pub fn resolve_input(data_dir: &Path, input: Option<&Path>) -> Result<PathBuf> {
    let input = input.unwrap_or_else(|| Path::new(DEFAULT_INPUT_FILE));

    let mut candidates = vec![input.to_path_buf(), data_dir.join(input)];
    if let Some(name) = input.file_name() {
        candidates.push(data_dir.join(name));
    }

    for candidate in &candidates {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "resolved input file");
            return Ok(candidate.clone());
        }
    }

    Err(IngestError::FileNotFound {
        path: input.to_path_buf(),
    })
}
