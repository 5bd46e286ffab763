//! Module graph storage and depth-first cycle detection.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Directed graph of module identifiers.
///
/// Edge lists keep insertion order, and iteration over modules follows
/// first-tracked order, so traversal results are deterministic for a given
/// build sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGraph {
    edges: IndexMap<String, Vec<String>>,
}

impl ModuleGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the full ordered dependency list for `module_id`.
    ///
    /// The previous list, if any, is replaced outright - last write wins.
    /// The node is created when absent. Tracking the same list twice is a
    /// no-op.
    pub fn track(&mut self, module_id: impl Into<String>, dependency_ids: Vec<String>) {
        self.edges.insert(module_id.into(), dependency_ids);
    }

    /// Remove a module's entry entirely. Returns whether it was present.
    ///
    /// Other modules may still reference the removed id; dangling edges are
    /// treated as leaves during traversal.
    pub fn untrack(&mut self, module_id: &str) -> bool {
        self.edges.shift_remove(module_id).is_some()
    }

    /// The stored dependency list for `module_id`, if tracked.
    pub fn dependencies_of(&self, module_id: &str) -> Option<&[String]> {
        self.edges.get(module_id).map(Vec::as_slice)
    }

    /// Whether `module_id` has been tracked.
    pub fn contains(&self, module_id: &str) -> bool {
        self.edges.contains_key(module_id)
    }

    /// Tracked module identifiers, in first-tracked order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of tracked modules.
    pub fn module_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether any module has been tracked.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Find the first cycle reachable from `start_id`, depth-first.
    ///
    /// Dependencies are followed in stored list order, so the result is
    /// deterministic: the first repeated node encountered in pre-order
    /// wins. The returned path starts at the repeated node and is closed
    /// by appending it once more (`[b, c, b]` for a `b -> c -> b` loop
    /// found below some other root). An empty vec means no cycle is
    /// reachable from `start_id`.
    ///
    /// Nodes fully explored without producing a cycle are memoized and
    /// never revisited from another path, which keeps diamond-shaped
    /// graphs linear instead of exponential. Untracked ids are leaves.
    pub fn detect_circular_dependencies(&self, start_id: &str) -> Vec<String> {
        let mut path: Vec<&str> = vec![start_id];
        let mut frames = vec![self.edge_list(start_id).iter()];
        let mut clean: FxHashSet<&str> = FxHashSet::default();

        while let Some(frame) = frames.last_mut() {
            match frame.next() {
                Some(dependency) => {
                    if let Some(position) = path.iter().position(|id| *id == dependency.as_str()) {
                        let mut cycle: Vec<String> =
                            path[position..].iter().map(|id| (*id).to_string()).collect();
                        cycle.push(dependency.clone());
                        tracing::debug!(
                            start = start_id,
                            cycle = %format_cycle(&cycle),
                            "circular dependency detected"
                        );
                        return cycle;
                    }
                    if clean.contains(dependency.as_str()) {
                        continue;
                    }
                    path.push(dependency.as_str());
                    frames.push(self.edge_list(dependency).iter());
                }
                None => {
                    frames.pop();
                    if let Some(explored) = path.pop() {
                        clean.insert(explored);
                    }
                }
            }
        }

        Vec::new()
    }

    fn edge_list(&self, module_id: &str) -> &[String] {
        self.edges.get(module_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Render a cycle path as `a -> b -> a` for diagnostics.
pub fn format_cycle(cycle: &[String]) -> String {
    cycle.join(" -> ")
}
