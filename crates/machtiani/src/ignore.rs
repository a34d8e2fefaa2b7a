//! `.machtiani.ignore`: one path per line, `#` starts a comment.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

pub const IGNORE_FILE_NAME: &str = ".machtiani.ignore";

/// Read the ignore list at `path`. A missing file is an empty list.
pub fn read_ignore_file(path: &Path) -> Result<Vec<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to open {}", path.display()));
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
