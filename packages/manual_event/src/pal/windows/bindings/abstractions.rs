use std::fmt::Debug;

use windows::Win32::Foundation::{HANDLE, WAIT_EVENT};
use windows::core::Result;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // CreateEventW() for an unnamed auto-reset event object that starts out unsignaled.
    fn create_event(&self) -> Result<HANDLE>;

    fn set_event(&self, event: HANDLE) -> Result<()>;

    fn reset_event(&self, event: HANDLE) -> Result<()>;

    // WaitForSingleObject() without timeout.
    fn wait_for_single_object(&self, handle: HANDLE) -> WAIT_EVENT;

    fn close_handle(&self, handle: HANDLE) -> Result<()>;
}
