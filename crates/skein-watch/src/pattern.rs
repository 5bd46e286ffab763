//! Negated-pattern classification for watch lists.
//!
//! Watch patterns use a leading `!` to mark ignores. Extglob groups
//! (`!(...)`) are a different syntax and must pass through untouched. An
//! escaped `\!` cannot open an extglob group, so it still counts as a
//! negation marker here.

use serde::{Deserialize, Serialize};

/// A watch pattern split into its negation marker and remainder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedPattern {
    /// The input, verbatim.
    pub original: String,
    /// Whether the pattern is an ignore.
    pub negated: bool,
    /// The pattern with any leading negation marker removed.
    pub pattern: String,
}

/// Classify a single watch pattern.
///
/// ```rust
/// use skein_watch::classify;
///
/// let c = classify("!foo");
/// assert!(c.negated);
/// assert_eq!(c.pattern, "foo");
///
/// // Extglob exclusion, not negation.
/// let c = classify("!(foo)");
/// assert!(!c.negated);
/// assert_eq!(c.pattern, "!(foo)");
/// ```
pub fn classify(pattern: &str) -> ClassifiedPattern {
    let (negated, remainder) = if let Some(rest) = pattern.strip_prefix("\\!") {
        (true, rest)
    } else if let Some(rest) = pattern.strip_prefix('!') {
        if rest.starts_with('(') {
            (false, pattern)
        } else {
            (true, rest)
        }
    } else {
        (false, pattern)
    };

    ClassifiedPattern {
        original: pattern.to_string(),
        negated,
        pattern: remainder.to_string(),
    }
}

/// Partition a watch list into include and ignore patterns, markers
/// stripped. The form the rebuild pipeline consumes.
pub fn split_patterns(patterns: &[String]) -> (Vec<String>, Vec<String>) {
    let mut includes = Vec::new();
    let mut ignores = Vec::new();
    for pattern in patterns {
        let classified = classify(pattern);
        if classified.negated {
            ignores.push(classified.pattern);
        } else {
            includes.push(classified.pattern);
        }
    }
    (includes, ignores)
}
