//! Change-impact engine
//!
//! Answers "which files are affected if these files change?" by computing
//! the reflexive-transitive closure of the changed set over the dependent
//! relation, then narrowing to the test-path subset the runner cares about.

use serde::Serialize;
use std::collections::{HashSet, VecDeque};

use crate::graph::DependencyGraph;

/// Reflexive-transitive closure of `changed` over the dependent relation.
///
/// Multi-seed BFS with a visited set: every identifier is expanded at most
/// once, so cycles and diamond-shaped dependency structures terminate.
/// Seeds absent from the graph's key set contribute only themselves, and
/// duplicate seeds collapse on first visit. Pure function, O(V+E) over the
/// reachable subgraph.
pub fn compute_impact(graph: &DependencyGraph, changed: &[String]) -> HashSet<String> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for seed in changed {
        if visited.insert(seed.clone()) {
            queue.push_back(seed.as_str());
        }
    }

    while let Some(current) = queue.pop_front() {
        for dependent in graph.dependents(current) {
            if visited.insert(dependent.clone()) {
                queue.push_back(dependent.as_str());
            }
        }
    }

    visited
}

/// Narrow an impact set to identifiers under a test-path prefix.
///
/// Matching is a plain `starts_with` on the identifier string, not a
/// path-segment match: "src/testsuite/x.py" matches prefix "src/test".
/// That literal policy is load-bearing; changing it would silently change
/// which tests run. The result is sorted so CLI output is stable.
pub fn filter_by_prefix(impacted: &HashSet<String>, prefix: &str) -> Vec<String> {
    let mut subset: Vec<String> = impacted
        .iter()
        .filter(|path| path.starts_with(prefix))
        .cloned()
        .collect();
    subset.sort();
    subset
}

/// Full impact analysis result, serialized for `--format json`.
#[derive(Debug, Serialize)]
pub struct ImpactReport {
    pub seeds: Vec<String>,
    pub impacted: Vec<String>,
    pub tests: Vec<String>,
    pub test_prefix: String,
    pub impacted_count: usize,
    pub test_count: usize,
    pub truncated: bool,
}

/// Compute the closure, apply the test filter, and package the outcome.
///
/// The identifier lists are always complete; `lines`/`args` output feeds
/// the test runner and must never lose members. Capping is opt-in via
/// [`ImpactReport::capped`] for the JSON echo only.
pub fn build_report(graph: &DependencyGraph, changed: &[String], prefix: &str) -> ImpactReport {
    let impact = compute_impact(graph, changed);
    let tests = filter_by_prefix(&impact, prefix);

    let mut seeds: Vec<String> = changed.to_vec();
    seeds.sort();
    seeds.dedup();

    let mut impacted: Vec<String> = impact.iter().cloned().collect();
    impacted.sort();

    let impacted_count = impacted.len();
    let test_count = tests.len();

    ImpactReport {
        seeds,
        impacted,
        tests,
        test_prefix: prefix.to_string(),
        impacted_count,
        test_count,
        truncated: false,
    }
}

impl ImpactReport {
    /// Cap the echoed identifier lists at `max` entries.
    ///
    /// Only for the JSON report, where a pathological closure would bloat
    /// the output; `impacted_count`/`test_count` keep the full sizes and
    /// `truncated` records that the cap applied.
    pub fn capped(mut self, max: usize) -> ImpactReport {
        self.truncated = self.impacted.len() > max || self.tests.len() > max;
        self.impacted.truncate(max);
        self.tests.truncate(max);
        self
    }
}
