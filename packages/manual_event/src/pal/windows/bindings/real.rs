use windows::Win32::Foundation::{CloseHandle, HANDLE, WAIT_EVENT};
use windows::Win32::System::Threading::{
    CreateEventW, INFINITE, ResetEvent, SetEvent, WaitForSingleObject,
};
use windows::core::{PCWSTR, Result};

use crate::pal::windows::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real OS bindings are excluded from coverage measurement because:
// 1. They are tested via integration tests running on actual Windows.
// 2. Error paths require OS-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn create_event(&self) -> Result<HANDLE> {
        // Default security, auto-reset, initially unsignaled, unnamed.
        // SAFETY: No safety requirements beyond passing valid arguments.
        unsafe { CreateEventW(None, false, false, PCWSTR::null()) }
    }

    fn set_event(&self, event: HANDLE) -> Result<()> {
        // SAFETY: No safety requirements beyond passing a valid handle.
        unsafe { SetEvent(event) }
    }

    fn reset_event(&self, event: HANDLE) -> Result<()> {
        // SAFETY: No safety requirements beyond passing a valid handle.
        unsafe { ResetEvent(event) }
    }

    fn wait_for_single_object(&self, handle: HANDLE) -> WAIT_EVENT {
        // SAFETY: No safety requirements beyond passing a valid handle.
        unsafe { WaitForSingleObject(handle, INFINITE) }
    }

    fn close_handle(&self, handle: HANDLE) -> Result<()> {
        // SAFETY: The caller owns the handle and never uses it again after this call.
        unsafe { CloseHandle(handle) }
    }
}
