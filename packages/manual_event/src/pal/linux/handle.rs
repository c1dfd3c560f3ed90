use std::io;
use std::os::fd::RawFd;

use tracing::{debug, error, trace, warn};

use crate::pal::NativeHandle;
use crate::pal::linux::{Bindings, BindingsFacade};
use crate::{Error, Result};

/// An event object backed by a non-blocking `eventfd`.
///
/// The eventfd counter is the event state: zero is unsignaled, anything else is signaled.
/// Reading the counter returns it to zero in one atomic step, which is how a waiter consumes
/// the signal. Multiple writes before a read add up in the counter but are consumed by that
/// single read, so signals collapse the way our contract requires.
#[derive(Debug)]
pub(crate) struct NativeHandleImpl {
    fd: RawFd,

    bindings: BindingsFacade,
}

impl NativeHandleImpl {
    pub(crate) fn new(bindings: BindingsFacade) -> Result<Self> {
        let fd = bindings.eventfd().map_err(|source| {
            error!(%source, "failed to create eventfd");
            Error::ObjectCreation { source }
        })?;

        debug!(fd, "created eventfd");

        Ok(Self { fd, bindings })
    }

    /// Returns `true` if this call consumed a signal.
    fn try_consume(&self) -> bool {
        match self.bindings.read_counter(self.fd) {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => false,
            Err(e) => panic!("failed to read eventfd {}: {e}", self.fd),
        }
    }

    fn poll_readable(&self) {
        loop {
            match self.bindings.poll_readable(self.fd) {
                Ok(()) => return,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => panic!("failed to poll eventfd {}: {e}", self.fd),
            }
        }
    }
}

impl NativeHandle for NativeHandleImpl {
    fn signal(&self) {
        match self.bindings.write_counter(self.fd, 1) {
            Ok(()) => {}
            // The counter is saturated. That is still a pending signal, so there is nothing to do.
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {}
            Err(e) => panic!("failed to write eventfd {}: {e}", self.fd),
        }
    }

    fn wait(&self) {
        if self.try_consume() {
            return;
        }

        loop {
            self.poll_readable();

            // Readability only tells us that a signal was pending at some point. Another waiter
            // may have consumed it before our read, in which case we go back to polling.
            if self.try_consume() {
                return;
            }

            trace!(fd = self.fd, "signal consumed by another waiter, polling again");
        }
    }

    fn reset(&self) {
        self.try_consume();
    }
}

impl Drop for NativeHandleImpl {
    fn drop(&mut self) {
        if let Err(e) = self.bindings.close(self.fd) {
            // The descriptor is gone either way. Panicking in drop would only make things worse.
            warn!(fd = self.fd, error = %e, "failed to close eventfd");
            return;
        }

        debug!(fd = self.fd, "closed eventfd");
    }
}
