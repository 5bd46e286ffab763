//! Error types for completion normalization.
//!
//! Only `async_done` can fail in a reportable way; debouncing and pattern
//! classification never construct errors of their own.

use thiserror::Error;

/// Boxed error trait object used at the completion boundary, where the
/// concrete failure type of a unit of work is not known.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Recoverable failures delivered through an `async_done` result callback.
///
/// A third condition exists that is deliberately *not* represented here: a
/// panic raised inside the result-callback path after completion was
/// already signaled. That propagates to the ambient execution context
/// rather than being captured or redelivered.
#[derive(Debug, Error)]
pub enum AsyncDoneError {
    /// The unit of work's completion callback reported an explicit error.
    #[error("unit of work failed: {0}")]
    Callback(#[source] BoxError),

    /// A deferred unit of work was rejected. Rejections that carried no
    /// reason are normalized to a generic error, so this is never empty.
    #[error("deferred unit of work was rejected: {0}")]
    Rejection(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_underlying_message() {
        let err = AsyncDoneError::Callback("sass compile failed".into());
        assert_eq!(err.to_string(), "unit of work failed: sass compile failed");

        let err = AsyncDoneError::Rejection("no reason given".into());
        assert!(err.to_string().contains("no reason given"));
    }

    #[test]
    fn source_is_preserved() {
        use std::error::Error;

        let err = AsyncDoneError::Callback("inner".into());
        assert!(err.source().is_some());
    }
}
