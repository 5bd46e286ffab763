//! Completion normalization for heterogeneous units of work.
//!
//! Build steps signal completion in different styles: some return a
//! future, some invoke a completion callback they were handed, and some
//! (synchronous or fire-and-forget steps) never signal at all.
//! [`async_done`] folds all three into a single at-most-once delivery of
//! `Result<T, AsyncDoneError>` to one result callback.

use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::{AsyncDoneError, BoxError};

type ResultCallback<T> = Box<dyn FnOnce(Result<T, AsyncDoneError>) + Send>;

/// Shared take-once slot; whichever completion path gets here first
/// delivers, every later attempt finds it empty.
type CallbackSlot<T> = Arc<Mutex<Option<ResultCallback<T>>>>;

/// Failure reason carried by a deferred unit of work.
///
/// Rejections may arrive without any reason attached; normalization still
/// has to produce a non-null error in that case.
#[derive(Debug)]
pub struct Rejection {
    reason: Option<BoxError>,
}

impl Rejection {
    /// A rejection with an explicit reason.
    pub fn new(reason: impl Into<BoxError>) -> Self {
        Self { reason: Some(reason.into()) }
    }

    /// A rejection that carried no reason at all.
    pub fn unexplained() -> Self {
        Self { reason: None }
    }

    fn into_error(self) -> BoxError {
        self.reason
            .unwrap_or_else(|| "rejected without a reason".into())
    }
}

/// How a unit of work signals its completion.
pub enum Completion<T> {
    /// The work returned a deferred value; continuations drive delivery.
    Deferred(Pin<Box<dyn Future<Output = Result<T, Rejection>> + Send>>),

    /// The work (or something it spawned) will invoke the [`Done`] handle
    /// it was given.
    Callback,

    /// The work completes out of band and will never signal. The result
    /// callback is simply never invoked; timeouts are the caller's
    /// responsibility.
    Detached,
}

impl<T> Completion<T> {
    /// Box a future as a deferred completion.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, Rejection>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    /// Whether this completion is driven by a deferred value. The
    /// structural stand-in for a duck-typed "has a then" check.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deferred(_) => f.write_str("Completion::Deferred(..)"),
            Self::Callback => f.write_str("Completion::Callback"),
            Self::Detached => f.write_str("Completion::Detached"),
        }
    }
}

/// Completion handle appended to a unit of work.
///
/// Consumed on use, and backed by the same take-once slot as the deferred
/// path, so the result callback can never be invoked twice no matter how
/// the work signals.
pub struct Done<T> {
    slot: CallbackSlot<T>,
}

impl<T> Done<T> {
    /// Signal successful completion with `value`.
    pub fn resolve(self, value: T) {
        self.deliver(Ok(value));
    }

    /// Signal failure with an explicit error.
    pub fn reject(self, error: impl Into<BoxError>) {
        self.deliver(Err(AsyncDoneError::Callback(error.into())));
    }

    fn deliver(self, outcome: Result<T, AsyncDoneError>) {
        let callback = self.slot.lock().take();
        if let Some(callback) = callback {
            callback(outcome);
        } else {
            tracing::debug!("completion signaled more than once; extra signal dropped");
        }
    }
}

/// Run `work` and normalize however it signals completion into one
/// delivery of `(error, value)` to `on_result`.
///
/// `work` receives a [`Done`] handle (the appended completion callback)
/// and returns a [`Completion`] describing its style. `on_result` fires at
/// most once across all styles; for [`Completion::Detached`] it never
/// fires. A panic inside `on_result` propagates to the ambient execution
/// context - it is never caught or redelivered.
///
/// The deferred arm spawns onto the current tokio runtime.
///
/// ```rust
/// use skein_watch::{Completion, async_done};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, rx) = tokio::sync::oneshot::channel();
/// async_done(
///     |_done| Completion::deferred(async { Ok(2) }),
///     move |result| {
///         let _ = tx.send(result);
///     },
/// );
/// assert_eq!(rx.await.unwrap().unwrap(), 2);
/// # }
/// ```
pub fn async_done<T, W, C>(work: W, on_result: C)
where
    T: Send + 'static,
    W: FnOnce(Done<T>) -> Completion<T>,
    C: FnOnce(Result<T, AsyncDoneError>) + Send + 'static,
{
    let slot: CallbackSlot<T> = Arc::new(Mutex::new(Some(Box::new(on_result))));
    let done = Done { slot: Arc::clone(&slot) };

    match work(done) {
        Completion::Deferred(future) => {
            tokio::spawn(async move {
                let outcome = future.await;
                let callback = slot.lock().take();
                if let Some(callback) = callback {
                    match outcome {
                        Ok(value) => callback(Ok(value)),
                        Err(rejection) => {
                            callback(Err(AsyncDoneError::Rejection(rejection.into_error())));
                        }
                    }
                }
            });
        }
        Completion::Callback => {
            // The Done handle the work kept (or already consumed) owns
            // delivery.
        }
        Completion::Detached => {
            tracing::debug!("unit of work completes out of band; no result will be delivered");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn deferred_success_delivers_value() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        async_done(
            |_done| Completion::deferred(async { Ok(2) }),
            move |result| {
                let _ = tx.send(result);
            },
        );

        let result = rx.await.expect("delivered");
        assert_eq!(result.expect("success"), 2);
    }

    #[tokio::test]
    async fn deferred_rejection_delivers_error() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        async_done(
            |_done: Done<u32>| {
                Completion::deferred(async { Err(Rejection::new("disk full")) })
            },
            move |result| {
                let _ = tx.send(result);
            },
        );

        let err = rx.await.expect("delivered").expect_err("failure");
        assert!(matches!(err, AsyncDoneError::Rejection(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn rejection_without_reason_still_produces_an_error() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        async_done(
            |_done: Done<u32>| Completion::deferred(async { Err(Rejection::unexplained()) }),
            move |result| {
                let _ = tx.send(result);
            },
        );

        let err = rx.await.expect("delivered").expect_err("failure");
        assert!(err.to_string().contains("rejected without a reason"));
    }

    #[tokio::test]
    async fn callback_style_forwards_success() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        async_done(
            |done| {
                tokio::spawn(async move {
                    done.resolve(7);
                });
                Completion::Callback
            },
            move |result| {
                let _ = tx.send(result);
            },
        );

        assert_eq!(rx.await.expect("delivered").expect("success"), 7);
    }

    #[tokio::test]
    async fn callback_style_forwards_error() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        async_done(
            |done: Done<u32>| {
                done.reject("step exploded");
                Completion::Callback
            },
            move |result| {
                let _ = tx.send(result);
            },
        );

        let err = rx.await.expect("delivered").expect_err("failure");
        assert!(matches!(err, AsyncDoneError::Callback(_)));
        assert!(err.to_string().contains("step exploded"));
    }

    #[tokio::test]
    async fn detached_work_never_delivers() {
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&delivered);
        async_done(
            |_done: Done<u32>| Completion::Detached,
            move |_result| {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(delivered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn result_callback_fires_at_most_once() {
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&delivered);

        // The work both resolves its Done handle and returns a future;
        // only the first signal wins.
        async_done(
            |done| {
                done.resolve(1);
                Completion::deferred(async { Ok(2) })
            },
            move |result| {
                sink.lock().push(result.expect("success"));
            },
        );

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(*delivered.lock(), vec![1]);
    }

    #[test]
    fn is_deferred_identifies_completion_style() {
        assert!(Completion::<u32>::deferred(async { Ok(1) }).is_deferred());
        assert!(!Completion::<u32>::Callback.is_deferred());
        assert!(!Completion::<u32>::Detached.is_deferred());
    }

    #[test]
    #[should_panic(expected = "listener blew up")]
    fn panic_in_result_callback_propagates() {
        // Callback-style delivery runs on the signaling context, so the
        // panic surfaces right here instead of being captured.
        async_done(
            |done: Done<u32>| {
                done.resolve(1);
                Completion::Callback
            },
            |_result| panic!("listener blew up"),
        );
    }
}
