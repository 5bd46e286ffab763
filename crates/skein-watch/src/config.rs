//! Rebuild coordination configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::debounce::DebounceEdge;
use crate::pattern;

/// Configuration for how watch events are collapsed into rebuild triggers.
///
/// Threaded through calls explicitly; there is no process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildConfig {
    /// Quiet window collapsing a burst of change events into one trigger.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Also trigger on the leading edge of a burst.
    #[serde(default)]
    pub at_start: bool,

    /// Fire on a fixed cadence from burst start instead of waiting for the
    /// burst to go quiet.
    #[serde(default)]
    pub guarantee_timeout: bool,

    /// Watch patterns; a leading `!` marks an ignore.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for RebuildConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            at_start: false,
            guarantee_timeout: false,
            patterns: Vec::new(),
        }
    }
}

impl RebuildConfig {
    /// The debounce window as a `Duration`.
    pub fn debounce_wait(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Edge behavior for [`crate::debounce_with`].
    pub fn edge(&self) -> DebounceEdge {
        DebounceEdge {
            at_start: self.at_start,
            guarantee_wait: self.guarantee_timeout,
        }
    }

    /// Partition the configured patterns into includes and ignores.
    pub fn split_patterns(&self) -> (Vec<String>, Vec<String>) {
        pattern::split_patterns(&self.patterns)
    }
}

fn default_debounce_ms() -> u64 {
    200
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_trailing_edge_with_200ms_window() {
        let config = RebuildConfig::default();
        assert_eq!(config.debounce_ms, 200);
        assert!(!config.at_start);
        assert!(!config.guarantee_timeout);
        assert!(config.patterns.is_empty());
        assert_eq!(config.debounce_wait(), Duration::from_millis(200));
        assert_eq!(config.edge(), DebounceEdge::default());
    }

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let config: RebuildConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config.debounce_ms, RebuildConfig::default().debounce_ms);
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config: RebuildConfig =
            serde_json::from_str(r#"{"debounce_ms": 50, "at_start": true}"#)
                .expect("valid config");
        assert_eq!(config.debounce_ms, 50);
        assert!(config.at_start);
        assert!(!config.guarantee_timeout);
    }

    #[test]
    fn split_patterns_uses_classification() {
        let config = RebuildConfig {
            patterns: vec!["src/**".to_string(), "!dist/**".to_string()],
            ..Default::default()
        };

        let (includes, ignores) = config.split_patterns();
        assert_eq!(includes, vec!["src/**"]);
        assert_eq!(ignores, vec!["dist/**"]);
    }
}
