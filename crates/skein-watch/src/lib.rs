//! # skein-watch
//!
//! Rebuild coordination for the incremental pipeline.
//!
//! The watch side of a bundler deals with signals that are bursty,
//! heterogeneous, and occasionally absent. This crate makes them
//! well-behaved without owning any of the rebuild work itself:
//!
//! - [`debounce`] collapses a burst of change events into one (or, on the
//!   leading edge, at most two) controlled invocations.
//! - [`async_done`] normalizes the completion styles a unit of work might
//!   use - a returned future, an invoked callback, or nothing at all -
//!   into a single at-most-once `(error, value)` delivery.
//! - [`classify`] splits watch patterns into includes and `!`-negated
//!   ignores, leaving extglob groups alone.
//! - [`RebuildConfig`] carries the knobs for all of the above as explicit
//!   configuration threaded through calls, never module-level state.
//!
//! Serialization of the actual rebuild (e.g. "one bundle build in flight")
//! stays with the pipeline; this crate only guarantees trigger collapsing
//! and completion normalization.
//!
//! ## Quick Start
//!
//! ```rust
//! use skein_watch::{RebuildConfig, debounce_with};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let config = RebuildConfig::default();
//! let rebuilds = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&rebuilds);
//!
//! let trigger = debounce_with(
//!     move |_changed: Vec<String>| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//!     config.debounce_wait(),
//!     config.edge(),
//! );
//!
//! trigger.call(vec!["src/a.js".into()]);
//! trigger.call(vec!["src/a.js".into(), "src/b.js".into()]);
//! # }
//! ```

mod config;
mod debounce;
mod done;
mod error;
mod pattern;

pub use config::RebuildConfig;
pub use debounce::{Debounced, DebounceEdge, debounce, debounce_with};
pub use done::{Completion, Done, Rejection, async_done};
pub use error::{AsyncDoneError, BoxError};
pub use pattern::{ClassifiedPattern, classify, split_patterns};
