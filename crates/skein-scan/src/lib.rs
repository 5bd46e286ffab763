//! # skein-scan
//!
//! Hand-written scanner that extracts `require("...")` module specifiers
//! from source text without building an AST.
//!
//! The scanner walks the text left to right, skipping comments and string
//! literals, and captures the literal argument of every `require` call it
//! finds. It is deliberately best-effort: anything it cannot recognize as a
//! static dependency declaration is omitted from the output rather than
//! reported as an error. This keeps it usable on partially written or
//! syntactically broken modules during a watch session.
//!
//! ## Overview
//!
//! - **Pure**: no I/O, no allocation beyond the output list, no retained
//!   state. Identical input always yields identical output.
//! - **Order-preserving**: specifiers are returned in encounter order and
//!   duplicates are kept. The dependency graph relies on that ordering.
//! - **Regex-free**: identifiers, whitespace, and comments are recognized
//!   with explicit character-class predicates.
//!
//! ## Quick Start
//!
//! ```rust
//! let deps = skein_scan::parse("var a = require('x'); var b = require(\"y\");");
//! assert_eq!(deps, vec!["x", "y"]);
//!
//! // Comments never produce matches, call-adjacent comments are fine.
//! let deps = skein_scan::parse("// require('nope')\nrequire /*c*/ (\"r\")");
//! assert_eq!(deps, vec!["r"]);
//! ```

mod lexer;
mod scanner;

pub use lexer::is_identifier;
pub use scanner::parse;
