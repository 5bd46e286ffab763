//! Burst-collapsing function wrapper.
//!
//! A debounced wrapper owns a single pending timer at most. Each call
//! overwrites the stored arguments; depending on the configured edge
//! behavior the wrapped function runs on the trailing edge of the burst,
//! on the leading edge, or on a guaranteed cadence counted from burst
//! start. The model is cooperative tokio timers - no threads, no locks
//! held while the wrapped function runs.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Edge behavior for a debounced function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceEdge {
    /// Run the function immediately on the first call of a burst, in
    /// addition to a trailing run when further calls arrive. A burst can
    /// therefore produce up to two runs: first-and-last, never more.
    pub at_start: bool,

    /// Never reschedule the pending timer; it fires exactly `wait` after
    /// burst start with whichever arguments are most recent at that time.
    pub guarantee_wait: bool,
}

/// Wrap `f` so that a burst of calls collapses into a single trailing-edge
/// invocation carrying the last call's arguments.
///
/// Must be used inside a tokio runtime; the trailing timer is a spawned
/// sleep.
pub fn debounce<T, F>(f: F, wait: Duration) -> Debounced<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    debounce_with(f, wait, DebounceEdge::default())
}

/// Wrap `f` with explicit [`DebounceEdge`] behavior.
pub fn debounce_with<T, F>(f: F, wait: Duration, edge: DebounceEdge) -> Debounced<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debounced {
        shared: Arc::new(Shared {
            f: Box::new(f),
            wait,
            edge,
            state: Mutex::new(State {
                latest: None,
                timer: None,
                trailing_armed: false,
                epoch: 0,
            }),
        }),
    }
}

/// A debounced wrapper around a function of one argument.
///
/// The argument value stands in for both the original call's arguments and
/// its call context; the most recent call's value wins within a burst.
/// Independently constructed wrappers share no state.
pub struct Debounced<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    f: Box<dyn Fn(T) + Send + Sync>,
    wait: Duration,
    edge: DebounceEdge,
    state: Mutex<State<T>>,
}

struct State<T> {
    /// Most recent call's arguments, consumed by the edge that fires.
    latest: Option<T>,
    /// The single pending timer, if any. `Some` exactly while a burst is
    /// open.
    timer: Option<JoinHandle<()>>,
    /// Whether the trailing edge should invoke the function on elapse.
    trailing_armed: bool,
    /// Bumped on every reschedule so a raced, already-aborted timer can
    /// recognize itself as stale.
    epoch: u64,
}

impl<T: Send + 'static> Debounced<T> {
    /// Record a call. Depending on edge behavior this may invoke the
    /// wrapped function synchronously (leading edge) or arm/reset the
    /// trailing timer.
    pub fn call(&self, args: T) {
        let mut leading = None;
        {
            let mut state = self.shared.state.lock();
            let burst_open = state.timer.is_some();

            if !burst_open {
                if self.shared.edge.at_start {
                    // Leading edge consumes this call's arguments; the
                    // trailing edge only fires if another call arrives.
                    leading = Some(args);
                    state.trailing_armed = false;
                } else {
                    state.latest = Some(args);
                    state.trailing_armed = true;
                }
                state.epoch += 1;
                state.timer = Some(self.spawn_timer(state.epoch));
            } else {
                state.latest = Some(args);
                state.trailing_armed = true;
                if !self.shared.edge.guarantee_wait {
                    if let Some(previous) = state.timer.take() {
                        previous.abort();
                    }
                    state.epoch += 1;
                    state.timer = Some(self.spawn_timer(state.epoch));
                }
            }
        }

        if let Some(args) = leading {
            tracing::trace!("debounce fired on leading edge");
            (self.shared.f)(args);
        }
    }

    fn spawn_timer(&self, epoch: u64) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            tokio::time::sleep(shared.wait).await;
            let fire = {
                let mut state = shared.state.lock();
                if state.epoch != epoch {
                    // Rescheduled while this timer was between wakeup and
                    // lock; the replacement owns the burst now.
                    return;
                }
                state.timer = None;
                if state.trailing_armed {
                    state.trailing_armed = false;
                    state.latest.take()
                } else {
                    // Leading-only burst: nothing stored, state resets.
                    state.latest = None;
                    None
                }
            };
            if let Some(args) = fire {
                tracing::trace!("debounce fired on trailing edge");
                (shared.f)(args);
            }
        })
    }
}
