mod bindings;
mod handle;
mod platform;

use bindings::*;
pub(crate) use handle::*;
pub(crate) use platform::*;
