use std::io;

use tracing::{debug, error, warn};
use windows::Win32::Foundation::{HANDLE, WAIT_OBJECT_0};

use crate::pal::NativeHandle;
use crate::pal::windows::{Bindings, BindingsFacade};
use crate::{Error, Result};

/// An event object backed by a Win32 auto-reset event.
///
/// An auto-reset event releases exactly one waiter per signal and returns to the unsignaled
/// state as part of that release, so the kernel consumes the signal for us in the same atomic
/// step that wakes the waiter.
#[derive(Debug)]
pub(crate) struct NativeHandleImpl {
    event: HANDLE,

    bindings: BindingsFacade,
}

// SAFETY: Event object handles may be signaled, waited on and closed from any thread.
unsafe impl Send for NativeHandleImpl {}
// SAFETY: Event object handles may be signaled, waited on and closed from any thread.
unsafe impl Sync for NativeHandleImpl {}

impl NativeHandleImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Result<Self> {
        let event = bindings.create_event().map_err(|e| {
            error!(error = %e, "failed to create event object");
            Error::ObjectCreation {
                source: io::Error::other(e),
            }
        })?;

        debug!(?event, "created event object");

        Ok(Self { event, bindings })
    }
}

impl NativeHandle for NativeHandleImpl {
    fn signal(&self) {
        if let Err(e) = self.bindings.set_event(self.event) {
            panic!("failed to signal event object {:?}: {e}", self.event);
        }
    }

    fn wait(&self) {
        // No ResetEvent after waking: the auto-reset event consumes the signal in the same step
        // that releases us, so a set() cannot land between the wake and the reset and get lost.
        let result = self.bindings.wait_for_single_object(self.event);

        assert!(
            result == WAIT_OBJECT_0,
            "waiting for event object {:?} failed with {result:?}: {}",
            self.event,
            io::Error::last_os_error()
        );
    }

    fn reset(&self) {
        if let Err(e) = self.bindings.reset_event(self.event) {
            panic!("failed to reset event object {:?}: {e}", self.event);
        }
    }
}

impl Drop for NativeHandleImpl {
    fn drop(&mut self) {
        if let Err(e) = self.bindings.close_handle(self.event) {
            // The handle is unusable either way. Panicking in drop would only make things worse.
            warn!(event = ?self.event, error = %e, "failed to close event object");
            return;
        }

        debug!(event = ?self.event, "closed event object");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::ptr;

    use mockall::Sequence;
    use windows::Win32::Foundation::{E_OUTOFMEMORY, WAIT_FAILED};

    use super::*;
    use crate::pal::windows::MockBindings;

    fn fake_handle() -> HANDLE {
        HANDLE(ptr::without_provenance_mut(0x42))
    }

    // Every handle is created and eventually closed. Each test adds expectations in between.
    fn bindings_for_one_handle() -> MockBindings {
        let mut bindings = MockBindings::new();

        bindings
            .expect_create_event()
            .once()
            .returning(|| Ok(fake_handle()));
        bindings
            .expect_close_handle()
            .withf(|handle| *handle == fake_handle())
            .once()
            .returning(|_| Ok(()));

        bindings
    }

    #[test]
    fn creation_failure_is_object_creation_error() {
        let mut bindings = MockBindings::new();
        bindings
            .expect_create_event()
            .once()
            .returning(|| Err(E_OUTOFMEMORY.into()));

        let result = NativeHandleImpl::new(bindings.into());

        assert!(matches!(result, Err(Error::ObjectCreation { .. })));
    }

    #[test]
    fn operations_map_to_event_object_calls() {
        let mut bindings = bindings_for_one_handle();
        let mut seq = Sequence::new();

        bindings
            .expect_set_event()
            .withf(|handle| *handle == fake_handle())
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        bindings
            .expect_wait_for_single_object()
            .withf(|handle| *handle == fake_handle())
            .once()
            .in_sequence(&mut seq)
            .return_const(WAIT_OBJECT_0);
        bindings
            .expect_reset_event()
            .withf(|handle| *handle == fake_handle())
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let handle = NativeHandleImpl::new(bindings.into()).unwrap();

        handle.signal();
        handle.wait();
        handle.reset();
    }

    #[test]
    fn wait_leaves_signal_consumption_to_event_object() {
        let mut bindings = bindings_for_one_handle();
        let mut seq = Sequence::new();

        bindings
            .expect_set_event()
            .once()
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        bindings
            .expect_wait_for_single_object()
            .once()
            .in_sequence(&mut seq)
            .return_const(WAIT_OBJECT_0);
        bindings.expect_reset_event().never();

        let handle = NativeHandleImpl::new(bindings.into()).unwrap();

        handle.signal();
        handle.wait();
    }

    #[test]
    #[should_panic]
    fn wait_panics_on_failed_wait() {
        let mut bindings = bindings_for_one_handle();
        bindings
            .expect_wait_for_single_object()
            .once()
            .return_const(WAIT_FAILED);

        let handle = NativeHandleImpl::new(bindings.into()).unwrap();
        handle.wait();
    }

    #[test]
    fn close_failure_does_not_panic() {
        let mut bindings = MockBindings::new();
        bindings
            .expect_create_event()
            .once()
            .returning(|| Ok(fake_handle()));
        bindings
            .expect_close_handle()
            .once()
            .returning(|_| Err(E_OUTOFMEMORY.into()));

        let handle = NativeHandleImpl::new(bindings.into()).unwrap();
        drop(handle);
    }
}
