use std::io;
use std::os::fd::RawFd;
use std::ptr;

use crate::pal::linux::Bindings;

/// FFI bindings that target the real operating system that the build is targeting.
///
/// You would only use different bindings in PAL unit tests that need to use mock bindings.
/// Even then, whenever possible, unit tests should use real bindings for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetBindings;

// Real OS bindings are excluded from coverage measurement because:
// 1. They are tested via integration tests running on actual Linux.
// 2. Error paths require OS-level failures that are impractical to trigger in tests.
#[cfg_attr(coverage_nightly, coverage(off))]
impl Bindings for BuildTargetBindings {
    fn eventfd(&self) -> Result<RawFd, io::Error> {
        // SAFETY: No safety requirements beyond passing valid arguments.
        let fd = unsafe { libc::eventfd(0, libc::EFD_NONBLOCK | libc::EFD_CLOEXEC) };

        if fd >= 0 {
            Ok(fd)
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn write_counter(&self, fd: RawFd, value: u64) -> Result<(), io::Error> {
        // SAFETY: We pass a pointer to a live u64 together with its exact size.
        let result = unsafe {
            libc::write(
                fd,
                ptr::from_ref(&value).cast::<libc::c_void>(),
                size_of::<u64>(),
            )
        };

        if result >= 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn read_counter(&self, fd: RawFd) -> Result<u64, io::Error> {
        let mut value: u64 = 0;

        // SAFETY: We pass a pointer to a live u64 together with its exact size.
        let result = unsafe {
            libc::read(
                fd,
                ptr::from_mut(&mut value).cast::<libc::c_void>(),
                size_of::<u64>(),
            )
        };

        if result >= 0 {
            Ok(value)
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn poll_readable(&self, fd: RawFd) -> Result<(), io::Error> {
        let mut pollfd = libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        };

        // -1 means no timeout.
        // SAFETY: We pass a pointer to exactly one live pollfd.
        let result = unsafe { libc::poll(&raw mut pollfd, 1, -1) };

        if result >= 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }

    fn close(&self, fd: RawFd) -> Result<(), io::Error> {
        // SAFETY: The caller owns the descriptor and never uses it again after this call.
        let result = unsafe { libc::close(fd) };

        if result == 0 {
            Ok(())
        } else {
            Err(io::Error::last_os_error())
        }
    }
}
