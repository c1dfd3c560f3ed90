#![cfg_attr(coverage_nightly, coverage(off))]

use std::fmt::Debug;
use std::io;
use std::os::fd::RawFd;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::linux::MockBindings;
use crate::pal::linux::{Bindings, BuildTargetBindings};

/// Hides the real/mock bindings choice behind a single type.
#[derive(Clone)]
pub(crate) enum BindingsFacade {
    Real(&'static BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    pub(crate) const fn real() -> Self {
        Self::Real(&BuildTargetBindings)
    }
}

impl Bindings for BindingsFacade {
    fn eventfd(&self) -> Result<RawFd, io::Error> {
        match self {
            Self::Real(bindings) => bindings.eventfd(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.eventfd(),
        }
    }

    fn write_counter(&self, fd: RawFd, value: u64) -> Result<(), io::Error> {
        match self {
            Self::Real(bindings) => bindings.write_counter(fd, value),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.write_counter(fd, value),
        }
    }

    fn read_counter(&self, fd: RawFd) -> Result<u64, io::Error> {
        match self {
            Self::Real(bindings) => bindings.read_counter(fd),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.read_counter(fd),
        }
    }

    fn poll_readable(&self, fd: RawFd) -> Result<(), io::Error> {
        match self {
            Self::Real(bindings) => bindings.poll_readable(fd),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.poll_readable(fd),
        }
    }

    fn close(&self, fd: RawFd) -> Result<(), io::Error> {
        match self {
            Self::Real(bindings) => bindings.close(fd),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.close(fd),
        }
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}

impl Debug for BindingsFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(bindings) => bindings.fmt(f),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.fmt(f),
        }
    }
}
