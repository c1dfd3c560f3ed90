use std::fmt::Debug;

use crate::Result;

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type Handle: NativeHandle;

    fn new_handle(&self) -> Result<Self::Handle>;
}

/// An owned event object of the operating system, released when dropped.
///
/// Implementations must provide the same contract as the public event types: a signal is
/// consumed by exactly one `wait()` and multiple signals before a `wait()` collapse into one.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait NativeHandle: Debug + Send + Sync {
    fn signal(&self);

    // Blocks until signaled and consumes the signal.
    fn wait(&self);

    fn reset(&self);
}
