//! Remote URL lookup through the `git` binary.

use anyhow::{Context, Result};
use std::process::Command;

/// URL of `remote` in the repository containing the working directory.
pub fn remote_url(remote: &str) -> Result<String> {
    anyhow::ensure!(!remote.is_empty(), "remote name cannot be empty");

    let output = Command::new("git")
        .args(["remote", "get-url", remote])
        .output()
        .with_context(|| format!("failed to get remote URL for {remote}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "failed to get remote URL for {}: {}",
            remote,
            stderr.trim()
        );
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::debug!(remote, url = %url, "resolved remote");
    Ok(url)
}

/// Project name from a remote URL: the last path segment without `.git`.
pub fn project_name(url: &str) -> &str {
    let last = url.trim().rsplit('/').next().unwrap_or_default();
    last.strip_suffix(".git").unwrap_or(last)
}
