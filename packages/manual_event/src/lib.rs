#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A single-slot signaling event that lets one thread block until another thread signals it.
//!
//! The event tracks exactly one bit of state: signaled or unsignaled. Calling
//! [`set()`][Event::set] signals the event. Calling [`wait()`][Event::wait] blocks the current
//! thread until the event is signaled and then consumes the signal, returning the event to the
//! unsignaled state. A signal that arrives before anyone waits is not lost - it stays pending
//! until the next `wait()` consumes it.
//!
//! This is not a counting semaphore. Any number of `set()` calls made before a `wait()` collapse
//! into a single pending signal that releases a single `wait()`.
//!
//! # Implementations
//!
//! Two implementations of the same contract are provided, both implementing [`Signal`]:
//!
//! * [`CondvarEvent`] combines an atomic flag with a mutex and a condition variable. Signals
//!   that are already pending are consumed without touching the mutex.
//! * [`NativeEvent`] wraps an operating system event object (a Win32 event object on Windows,
//!   an `eventfd` on Linux). It is not available on other platforms or under Miri.
//!
//! [`Event`] is whichever of the two is the better fit for the build target: `NativeEvent` on
//! Windows and `CondvarEvent` everywhere else. Enable the `force_condvar` package feature to use
//! `CondvarEvent` on all platforms.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::thread;
//!
//! use manual_event::Event;
//!
//! let event = Arc::new(Event::new());
//! let value = Arc::new(AtomicU32::new(0));
//!
//! let consumer = thread::spawn({
//!     let event = Arc::clone(&event);
//!     let value = Arc::clone(&value);
//!
//!     move || {
//!         event.wait();
//!
//!         // Everything the other thread did before `set()` is visible after `wait()`.
//!         value.load(Ordering::Relaxed)
//!     }
//! });
//!
//! value.store(42, Ordering::Relaxed);
//! event.set();
//!
//! assert_eq!(consumer.join().unwrap(), 42);
//! ```
//!
//! # Resetting
//!
//! [`reset()`][Event::reset] discards a pending signal. It does not synchronize with concurrent
//! `set()` or `wait()` calls on other threads: a `set()` racing with `reset()` may or may not
//! survive it. Treat it as a best-effort cleanup, not as an ordering point.

mod condvar;
mod constants;
mod error;
mod event;
#[cfg(all(any(target_os = "linux", windows), not(miri)))]
mod native;
#[cfg(all(any(target_os = "linux", windows), not(miri)))]
mod pal;
mod signal;

pub use condvar::*;
pub(crate) use constants::*;
pub use error::*;
pub use event::*;
#[cfg(all(any(target_os = "linux", windows), not(miri)))]
pub use native::*;
pub use signal::*;
