use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};

use tracing::trace;

use crate::{ERR_POISONED_LOCK, Signal};

/// An event built from an atomic flag, a mutex and a condition variable.
///
/// The flag is the event state. The mutex and condition variable are only used to put a waiting
/// thread to sleep and to wake it up again, so neither `set()` on an already signaled event nor
/// `wait()` on an event with a pending signal ever touches the mutex.
///
/// This implementation is available on every platform. It is what [`Event`][crate::Event]
/// uses unless the platform has a native event object that performs better.
///
/// # Example
///
/// ```rust
/// use manual_event::CondvarEvent;
///
/// // Construction is `const`, so the event can live in a static.
/// static READY: CondvarEvent = CondvarEvent::new();
///
/// std::thread::spawn(|| READY.set());
///
/// READY.wait();
/// ```
#[derive(Debug, Default)]
pub struct CondvarEvent {
    // The event state. Read-modify-writes use AcqRel so that whatever the signaling thread wrote
    // before `set()` is visible to the thread whose `wait()` consumes the signal.
    is_set: AtomicBool,

    // Guards no data of its own. Notifying while holding it guarantees that a waiter which
    // checked the flag under the lock has already started waiting on `wake` when we notify,
    // so the notification cannot slip in between the check and the sleep.
    lock: Mutex<()>,

    wake: Condvar,
}

impl CondvarEvent {
    /// Creates a new event in the unsignaled state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_set: AtomicBool::new(false),
            lock: Mutex::new(()),
            wake: Condvar::new(),
        }
    }

    /// Signals the event.
    ///
    /// If a thread is blocked in [`wait()`][Self::wait], one such thread is woken up. Otherwise
    /// the signal stays pending until the next `wait()`. Signaling an event that is already
    /// signaled has no further effect.
    pub fn set(&self) {
        if self.is_set.swap(true, Ordering::AcqRel) {
            // Already signaled, so whoever is going to consume the signal has been notified.
            return;
        }

        let _guard = self.lock.lock().expect(ERR_POISONED_LOCK);
        self.wake.notify_one();
    }

    /// Blocks until the event is signaled, then consumes the signal.
    ///
    /// Returns without blocking if a signal is already pending.
    pub fn wait(&self) {
        if self.try_consume() {
            return;
        }

        trace!("no pending signal, blocking until signaled");

        let mut guard = self.lock.lock().expect(ERR_POISONED_LOCK);

        // The condition variable may wake us without a signal, or another waiter may have taken
        // the signal first. Either way we go back to sleep until we consume one ourselves.
        while !self.try_consume() {
            guard = self.wake.wait(guard).expect(ERR_POISONED_LOCK);
            trace!("woke up, checking for a pending signal");
        }
    }

    /// Discards a pending signal, if any.
    ///
    /// This is racy with respect to concurrent `set()` calls on other threads. A signal set at
    /// the same time may or may not be discarded.
    pub fn reset(&self) {
        // Waiters re-check the flag under the lock, so a waiter that was already notified
        // simply goes back to sleep if we clear the flag before it wakes up.
        self.is_set.store(false, Ordering::Release);
    }

    /// Atomically moves the event from signaled to unsignaled.
    ///
    /// Returns `true` if this call consumed a signal.
    fn try_consume(&self) -> bool {
        self.is_set
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }
}

impl Signal for CondvarEvent {
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
