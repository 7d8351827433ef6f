//! Dependency graph model and ingestion
//!
//! The graph is supplied by an external analysis command as a JSON object:
//! keys are file paths, values are lists of file paths that depend on the
//! key ("dependents"). Edges point from a file to the files that would be
//! affected if it changed.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::util;

/// Adjacency list mapping a file to its dependents.
///
/// The graph is a general directed graph: cycles are allowed, and an
/// identifier may appear in a dependents list without being a key itself
/// (it is then treated as having no outgoing edges).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new(edges: HashMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    /// Dependents of `file`, empty if the file is not a key in the graph.
    pub fn dependents(&self, file: &str) -> &[String] {
        self.edges.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Parse the JSON object emitted by the analysis command.
    ///
    /// Anything other than a mapping of string to list-of-string is a
    /// validation error; there is no partial recovery.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("parse dependency graph JSON")
    }

    /// Load a graph from a file path; `-` reads stdin.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read dependency graph from stdin")?;
            buf
        } else {
            util::read_to_string(path)?
        };
        Self::from_json_str(&content)
    }

    /// Run an external analysis command and parse its stdout as a graph.
    pub fn from_command(cmd: &str) -> Result<Self> {
        let stdout = util::run_shell_command(cmd)?;
        Self::from_json_str(&stdout)
            .with_context(|| format!("parse dependency graph from `{cmd}` output"))
    }
}
