//! # skein-graph
//!
//! In-memory module dependency graph with deterministic cycle detection.
//!
//! The graph maps module identifiers to their ordered dependency lists, as
//! produced by the scanner. It is a pure data structure: no I/O, no
//! resolution of specifiers to paths, no validation that dependencies
//! exist. The external pipeline owns its lifetime and persists it across
//! builds (hence the serde derives).
//!
//! Cycles are legal graph states, not errors; they become interesting only
//! when a rebuild asks [`ModuleGraph::detect_circular_dependencies`] to
//! fail fast on a cyclic module graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use skein_graph::{ModuleGraph, format_cycle};
//!
//! let mut graph = ModuleGraph::new();
//! graph.track("a.js", vec!["b.js".into()]);
//! graph.track("b.js", vec!["a.js".into()]);
//!
//! let cycle = graph.detect_circular_dependencies("a.js");
//! assert_eq!(format_cycle(&cycle), "a.js -> b.js -> a.js");
//! ```

mod graph;

pub use graph::{ModuleGraph, format_cycle};
