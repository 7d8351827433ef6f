//! Changed-file ingestion
//!
//! Seeds come from CLI arguments, a newline-delimited file (or stdin), or
//! an external `git diff --name-only` invocation.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::process::Command;

use crate::util;

/// Parse a newline-delimited list of changed paths. Blank lines and
/// surrounding whitespace are ignored.
pub fn parse_changed_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read changed paths from a file; `-` reads stdin.
pub fn changed_from_path(path: &Path) -> Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read changed files from stdin")?;
        buf
    } else {
        util::read_to_string(path)?
    };
    Ok(parse_changed_list(&content))
}

/// Ask git for the files changed relative to `base`.
pub fn changed_from_git(repo_root: &Path, base: &str) -> Result<Vec<String>> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .arg("diff")
        .arg("--name-only")
        .arg(base)
        .output()
        .with_context(|| format!("run git diff --name-only {base}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "git diff --name-only {base} failed ({}): {}",
            output.status,
            stderr.trim()
        );
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_changed_list(&stdout))
}
