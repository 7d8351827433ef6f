use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Run a command line through the shell and capture stdout as UTF-8.
/// Non-zero exit is an error carrying the command and its stderr.
pub fn run_shell_command(cmd: &str) -> Result<String> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(cmd)
        .output()
        .with_context(|| format!("run `{cmd}`"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("`{cmd}` failed ({}): {}", output.status, stderr.trim());
    }
    String::from_utf8(output.stdout).with_context(|| format!("decode `{cmd}` output"))
}
