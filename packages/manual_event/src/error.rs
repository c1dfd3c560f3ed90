use std::io;

use thiserror::Error;

/// Errors that can occur when creating an event.
///
/// Once created, an event never fails - its operations either succeed or the process is in a
/// state where continuing is not possible, in which case they panic.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system refused to create a native event object, typically because it
    /// has run out of resources.
    #[error("the operating system failed to create a native event object: {source}")]
    ObjectCreation {
        /// The error reported by the operating system.
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for event operations, returning the crate's
/// [`Error`] type as the error value.
#[allow(dead_code, reason = "conditional - only native events can fail to be created")]
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn object_creation_exposes_os_error_as_source() {
        let error = Error::ObjectCreation {
            source: io::Error::from(io::ErrorKind::OutOfMemory),
        };

        let source = error
            .source()
            .expect("object creation error must carry the OS error");

        let io_error = source
            .downcast_ref::<io::Error>()
            .expect("source must be the original io::Error");

        assert_eq!(io_error.kind(), io::ErrorKind::OutOfMemory);
    }

    #[test]
    fn object_creation_is_usable_as_result_error() {
        let result: Result<()> = Err(Error::ObjectCreation {
            source: io::Error::from(io::ErrorKind::Other),
        });

        assert!(matches!(result, Err(Error::ObjectCreation { .. })));
    }
}
