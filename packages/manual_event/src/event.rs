#[cfg(not(all(windows, not(miri), not(feature = "force_condvar"))))]
use crate::CondvarEvent;
#[cfg(all(windows, not(miri), not(feature = "force_condvar")))]
use crate::NativeEvent;
use crate::Signal;

// Windows event objects outperform a condition variable for this workload. Elsewhere the
// condition variable variant is at least as fast and avoids a kernel object per event.
#[cfg(all(windows, not(miri), not(feature = "force_condvar")))]
type EventImpl = NativeEvent;
#[cfg(not(all(windows, not(miri), not(feature = "force_condvar"))))]
type EventImpl = CondvarEvent;

/// A signaling event using the implementation best suited for the build target.
///
/// This is `NativeEvent` on Windows and [`CondvarEvent`][crate::CondvarEvent] on all other
/// platforms and under Miri. With the `force_condvar` package feature enabled it is
/// `CondvarEvent` everywhere. The behavior is the same either way - see [`Signal`] for the
/// contract.
///
/// The event is shared between threads by reference, typically by wrapping it in an
/// [`Arc`][std::sync::Arc] or embedding it in a larger structure that is shared.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
///
/// use manual_event::Event;
///
/// let ping = Arc::new(Event::new());
/// let pong = Arc::new(Event::new());
///
/// let responder = thread::spawn({
///     let ping = Arc::clone(&ping);
///     let pong = Arc::clone(&pong);
///
///     move || {
///         for _ in 0..3 {
///             ping.wait();
///             pong.set();
///         }
///     }
/// });
///
/// for _ in 0..3 {
///     ping.set();
///     pong.wait();
/// }
///
/// responder.join().unwrap();
/// ```
#[derive(Debug)]
pub struct Event {
    inner: EventImpl,
}

impl Event {
    /// Creates a new event in the unsignaled state.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot create the underlying event object. This only
    /// happens if the system is out of resources.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: EventImpl::new(),
        }
    }

    /// Signals the event.
    ///
    /// If a thread is blocked in [`wait()`][Self::wait], one such thread is woken up. Otherwise
    /// the signal stays pending until the next `wait()`. Signaling an event that is already
    /// signaled has no further effect.
    pub fn set(&self) {
        self.inner.set();
    }

    /// Blocks until the event is signaled, then consumes the signal.
    ///
    /// Returns without blocking if a signal is already pending.
    pub fn wait(&self) {
        self.inner.wait();
    }

    /// Discards a pending signal, if any.
    ///
    /// This is racy with respect to concurrent `set()` calls on other threads. A signal set at
    /// the same time may or may not be discarded.
    pub fn reset(&self) {
        self.inner.reset();
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Event {
    #[cfg_attr(coverage_nightly, coverage(off))] // Trivial forwarder.
    fn set(&self) {
        self.set();
    }

    #[cfg_attr(coverage_nightly, coverage(off))] // Trivial forwarder.
    fn wait(&self) {
        self.wait();
    }

    #[cfg_attr(coverage_nightly, coverage(off))] // Trivial forwarder.
    fn reset(&self) {
        self.reset();
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;
    use std::sync::Arc;

    use static_assertions::assert_impl_all;
    use testing::{assert_blocks, with_watchdog};

    use super::*;

    assert_impl_all!(Event: Send, Sync, Debug, Default, Signal);

    #[test]
    fn set_then_wait_returns() {
        with_watchdog(|| {
            let event = Event::new();

            event.set();
            event.wait();
        });
    }

    #[cfg_attr(miri, ignore)] // Relies on real time passing while another thread blocks.
    #[test]
    fn reset_then_wait_blocks() {
        with_watchdog(|| {
            let event = Arc::new(Event::default());

            event.set();
            event.reset();

            let waiter = assert_blocks({
                let event = Arc::clone(&event);
                move || event.wait()
            });

            event.set();
            waiter.join().unwrap();
        });
    }
}
