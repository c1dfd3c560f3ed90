use std::fmt::Debug;

#[cfg(test)]
use crate::pal::MockNativeHandle;
use crate::pal::{NativeHandle, NativeHandleImpl};

/// Hides the real/mock event object choice behind a single type.
pub(crate) enum HandleFacade {
    Real(NativeHandleImpl),

    #[cfg(test)]
    Mock(MockNativeHandle),
}

impl NativeHandle for HandleFacade {
    fn signal(&self) {
        match self {
            Self::Real(handle) => handle.signal(),
            #[cfg(test)]
            Self::Mock(handle) => handle.signal(),
        }
    }

    fn wait(&self) {
        match self {
            Self::Real(handle) => handle.wait(),
            #[cfg(test)]
            Self::Mock(handle) => handle.wait(),
        }
    }

    fn reset(&self) {
        match self {
            Self::Real(handle) => handle.reset(),
            #[cfg(test)]
            Self::Mock(handle) => handle.reset(),
        }
    }
}

impl From<NativeHandleImpl> for HandleFacade {
    fn from(handle: NativeHandleImpl) -> Self {
        Self::Real(handle)
    }
}

#[cfg(test)]
impl From<MockNativeHandle> for HandleFacade {
    fn from(handle: MockNativeHandle) -> Self {
        Self::Mock(handle)
    }
}

#[cfg_attr(coverage_nightly, coverage(off))] // No API contract to test.
impl Debug for HandleFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(handle) => handle.fmt(f),
            #[cfg(test)]
            Self::Mock(handle) => handle.fmt(f),
        }
    }
}
