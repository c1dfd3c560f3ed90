#![cfg_attr(coverage_nightly, coverage(off))]

use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

use windows::Win32::Foundation::{HANDLE, WAIT_EVENT};
use windows::core::Result;

#[cfg(test)]
use crate::pal::windows::MockBindings;
use crate::pal::windows::{Bindings, BuildTargetBindings};

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
    fn create_event(&self) -> Result<HANDLE> {
        match self {
            Self::Real(bindings) => bindings.create_event(),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.create_event(),
        }
    }

    fn set_event(&self, event: HANDLE) -> Result<()> {
        match self {
            Self::Real(bindings) => bindings.set_event(event),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.set_event(event),
        }
    }

    fn reset_event(&self, event: HANDLE) -> Result<()> {
        match self {
            Self::Real(bindings) => bindings.reset_event(event),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.reset_event(event),
        }
    }

    fn wait_for_single_object(&self, handle: HANDLE) -> WAIT_EVENT {
        match self {
            Self::Real(bindings) => bindings.wait_for_single_object(handle),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.wait_for_single_object(handle),
        }
    }

    fn close_handle(&self, handle: HANDLE) -> Result<()> {
        match self {
            Self::Real(bindings) => bindings.close_handle(handle),
            #[cfg(test)]
            Self::Mock(bindings) => bindings.close_handle(handle),
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
