use std::fmt::Debug;
use std::io;
use std::os::fd::RawFd;

/// Bindings for FFI calls into external libraries (either provided by operating system or not).
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    // eventfd() with a zero counter, in non-blocking close-on-exec mode.
    fn eventfd(&self) -> Result<RawFd, io::Error>;

    // write() of one u64 to add to the eventfd counter.
    fn write_counter(&self, fd: RawFd, value: u64) -> Result<(), io::Error>;

    // read() of one u64, returning the eventfd counter and resetting it to zero.
    fn read_counter(&self, fd: RawFd) -> Result<u64, io::Error>;

    // poll() without timeout until the descriptor is readable.
    fn poll_readable(&self, fd: RawFd) -> Result<(), io::Error>;

    fn close(&self, fd: RawFd) -> Result<(), io::Error>;
}
