/// The signaling contract shared by every event type in this package.
///
/// An event is either signaled or unsignaled, starting out unsignaled:
///
/// * [`set()`][Self::set] moves it to signaled. Setting an already signaled event has no effect.
/// * [`wait()`][Self::wait] blocks until the event is signaled and then moves it back to
///   unsignaled, consuming the signal. Each signal is consumed by exactly one `wait()`.
/// * [`reset()`][Self::reset] moves it to unsignaled without waiting.
///
/// Memory writes performed by a thread before it calls `set()` are visible to the thread whose
/// `wait()` consumes that signal.
///
/// Code that does not care which implementation is in use can be written against this trait.
///
/// # Example
///
/// ```rust
/// use manual_event::{CondvarEvent, Event, Signal};
///
/// fn signal_twice_and_consume(event: &impl Signal) {
///     event.set();
///     event.set();
///
///     // The two signals collapsed into one, which this consumes.
///     event.wait();
/// }
///
/// signal_twice_and_consume(&Event::new());
/// signal_twice_and_consume(&CondvarEvent::new());
/// ```
pub trait Signal: Send + Sync {
    /// Signals the event, releasing one thread blocked in [`wait()`][Self::wait] or, if there
    /// is no such thread, the next thread to call `wait()`.
    fn set(&self);

    /// Blocks the current thread until the event is signaled, then consumes the signal.
    ///
    /// Returns immediately if a signal is already pending. There is no timeout - the only thing
    /// that ends the wait is a call to [`set()`][Self::set].
    fn wait(&self);

    /// Discards a pending signal, if any.
    ///
    /// This does not establish any ordering with `set()` or `wait()` calls made concurrently on
    /// other threads - a signal set at the same time as the reset may or may not survive it.
    fn reset(&self);
}
