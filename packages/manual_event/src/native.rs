use crate::{Result, Signal};
use crate::pal::{HandleFacade, NativeHandle, Platform, PlatformFacade};

/// An event backed by an event object of the operating system.
///
/// * On Windows, this is an auto-reset Win32 event object. The kernel releases exactly one
///   waiter per signal and consumes the signal as part of that release.
/// * On Linux, this is an `eventfd`. A waiter sleeps until the descriptor becomes readable and
///   then consumes the signal by reading it, going back to sleep if another waiter read it first.
///
/// Either way, the observable behavior is identical to [`CondvarEvent`][crate::CondvarEvent]:
/// one pending signal at most, consumed by exactly one `wait()`.
///
/// This type is only available on Windows and Linux and not under Miri. Prefer
/// [`Event`][crate::Event] unless you specifically want a kernel object.
///
/// # Example
///
/// ```rust
/// use manual_event::NativeEvent;
///
/// let event = NativeEvent::try_new().expect("system has resources for one event object");
///
/// event.set();
/// event.wait();
/// ```
#[derive(Debug)]
pub struct NativeEvent {
    handle: HandleFacade,
}

impl NativeEvent {
    /// Creates a new event in the unsignaled state.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot create the event object. This only happens if the
    /// system is out of resources. Use [`try_new()`][Self::try_new] to handle that case.
    #[must_use]
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Creates a new event in the unsignaled state, reporting failure to create the underlying
    /// event object as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectCreation`][crate::Error::ObjectCreation] if the operating system
    /// cannot create the event object.
    pub fn try_new() -> Result<Self> {
        Self::from_pal(&PlatformFacade::real())
    }

    pub(crate) fn from_pal(pal: &PlatformFacade) -> Result<Self> {
        Ok(Self {
            handle: pal.new_handle()?,
        })
    }

    /// Signals the event.
    ///
    /// If a thread is blocked in [`wait()`][Self::wait], one such thread is woken up. Otherwise
    /// the signal stays pending until the next `wait()`. Signaling an event that is already
    /// signaled has no further effect.
    pub fn set(&self) {
        self.handle.signal();
    }

    /// Blocks until the event is signaled, then consumes the signal.
    ///
    /// Returns without blocking if a signal is already pending.
    pub fn wait(&self) {
        self.handle.wait();
    }

    /// Discards a pending signal, if any.
    ///
    /// This is racy with respect to concurrent `set()` calls on other threads. A signal set at
    /// the same time may or may not be discarded.
    pub fn reset(&self) {
        self.handle.reset();
    }
}

impl Default for NativeEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for NativeEvent {
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
    use std::io;
    use std::sync::Arc;

    use mockall::Sequence;
    use static_assertions::assert_impl_all;
    use testing::{assert_blocks, with_watchdog};

    use super::*;
    use crate::Error;
    use crate::pal::{MockNativeHandle, MockPlatform};

    assert_impl_all!(NativeEvent: Send, Sync, Debug, Default, Signal);

    #[test]
    fn operations_are_forwarded_to_native_handle() {
        let mut handle = MockNativeHandle::new();
        let mut seq = Sequence::new();

        handle
            .expect_signal()
            .once()
            .in_sequence(&mut seq)
            .return_const(());
        handle
            .expect_wait()
            .once()
            .in_sequence(&mut seq)
            .return_const(());
        handle
            .expect_reset()
            .once()
            .in_sequence(&mut seq)
            .return_const(());

        let mut platform = MockPlatform::new();
        platform
            .expect_new_handle()
            .once()
            .return_once(move || Ok(handle));

        let event = NativeEvent::from_pal(&PlatformFacade::from_mock(platform)).unwrap();

        event.set();
        event.wait();
        event.reset();
    }

    #[test]
    fn creation_failure_is_returned_as_error() {
        let mut platform = MockPlatform::new();
        platform.expect_new_handle().once().returning(|| {
            Err(Error::ObjectCreation {
                source: io::Error::from(io::ErrorKind::OutOfMemory),
            })
        });

        let result = NativeEvent::from_pal(&PlatformFacade::from_mock(platform));

        assert!(matches!(result, Err(Error::ObjectCreation { .. })));
    }

    #[test]
    fn real_set_then_wait_returns() {
        with_watchdog(|| {
            let event = NativeEvent::new();

            event.set();
            event.set();
            event.wait();
        });
    }

    #[test]
    fn real_wait_blocks_until_set() {
        with_watchdog(|| {
            let event = Arc::new(NativeEvent::try_new().unwrap());

            let waiter = assert_blocks({
                let event = Arc::clone(&event);
                move || event.wait()
            });

            event.set();
            waiter.join().unwrap();
        });
    }

    #[test]
    fn real_reset_discards_pending_signal() {
        with_watchdog(|| {
            let event = Arc::new(NativeEvent::default());

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
