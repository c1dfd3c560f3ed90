#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for testing and examples in Folo packages.
//!
//! Most tests of blocking primitives have two failure modes: something returns that should have
//! blocked, or something blocks forever that should have returned. The helpers here turn both
//! into ordinary test failures.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long a thread must stay blocked before we believe it is really blocked.
///
/// There is no way to prove that a thread is blocked forever, so tests settle for "blocked for
/// long enough that it would almost certainly have returned by now if it were going to".
pub const BLOCKED_GRACE_PERIOD: Duration = Duration::from_millis(100);

/// Runs a test with a timeout to prevent infinite hangs.
///
/// If the test takes longer than the timeout to complete, this panics instead of letting the
/// test run forever. A lost wakeup in a blocking primitive therefore shows up as a failed test
/// rather than a stuck CI job.
///
/// The timeout is 10 seconds under normal conditions and 60 seconds under Miri, where thread
/// synchronization primitives are significantly slower.
///
/// When the `MUTATION_TESTING` environment variable is set to "1", the watchdog is disabled
/// and the test function is executed directly, so that mutation testing can detect mutations
/// that cause hangs by its own means.
///
/// # Panics
///
/// Panics if the test exceeds the timeout (when not in mutation testing mode) or if the test
/// itself panics.
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// let answer = with_watchdog(|| 2 + 2);
/// assert_eq!(answer, 4);
/// ```
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if std::env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        return test_fn();
    }

    let timeout = watchdog_timeout();

    let (tx, rx) = mpsc::channel();

    let test_thread = thread::spawn(move || {
        let result = test_fn();

        // If this fails, the watchdog has already given up on us.
        drop(tx.send(result));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            test_thread
                .join()
                .expect("test thread completed, so it cannot have panicked");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test exceeded {timeout:?} timeout - something is blocked that should not be");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match test_thread.join() {
            Ok(()) => panic!("test thread disconnected without producing a result"),
            Err(payload) => std::panic::resume_unwind(payload),
        },
    }
}

/// Runs `blocking_fn` on a new thread and asserts that it is still running after
/// [`BLOCKED_GRACE_PERIOD`].
///
/// Returns the handle of the still-blocked thread. The caller is expected to unblock it and
/// join it, typically inside [`with_watchdog`] so that a thread that never unblocks fails the
/// test.
///
/// # Panics
///
/// Panics if the thread returns (or panics) before the grace period has elapsed.
///
/// # Example
///
/// ```rust
/// use std::sync::mpsc;
///
/// use testing::assert_blocks;
///
/// let (tx, rx) = mpsc::channel::<()>();
///
/// let receiver = assert_blocks(move || {
///     rx.recv().unwrap();
/// });
///
/// tx.send(()).unwrap();
/// receiver.join().unwrap();
/// ```
pub fn assert_blocks<F>(blocking_fn: F) -> JoinHandle<()>
where
    F: FnOnce() + Send + 'static,
{
    let handle = thread::spawn(blocking_fn);

    assert_still_blocked(&handle);

    handle
}

/// Asserts that the thread behind `handle` has not finished within [`BLOCKED_GRACE_PERIOD`].
///
/// # Panics
///
/// Panics if the thread finishes before the grace period has elapsed.
pub fn assert_still_blocked<T>(handle: &JoinHandle<T>) {
    thread::sleep(BLOCKED_GRACE_PERIOD);

    assert!(
        !handle.is_finished(),
        "thread was expected to stay blocked but it finished"
    );
}

#[cfg_attr(test, mutants::skip)] // Timeout tuning has no API contract.
fn watchdog_timeout() -> Duration {
    // Miri is dramatically slower for thread synchronization, so we use a longer timeout to
    // avoid false positives while still catching real hangs.
    if cfg!(miri) {
        Duration::from_secs(60)
    } else {
        Duration::from_secs(10)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn watchdog_returns_test_result() {
        let result = with_watchdog(|| "hello world");
        assert_eq!(result, "hello world");
    }

    #[test]
    #[should_panic]
    fn watchdog_propagates_test_panic() {
        with_watchdog(|| panic!("intentional panic"));
    }

    #[cfg_attr(miri, ignore)] // Relies on real time passing while another thread blocks.
    #[test]
    fn assert_blocks_accepts_blocked_thread() {
        let (tx, rx) = mpsc::channel::<()>();

        let handle = assert_blocks(move || {
            rx.recv().unwrap();
        });

        assert_still_blocked(&handle);

        tx.send(()).unwrap();
        handle.join().unwrap();
    }

    #[cfg_attr(miri, ignore)] // Relies on real time passing while another thread blocks.
    #[test]
    #[should_panic]
    fn assert_blocks_rejects_thread_that_returns() {
        drop(assert_blocks(|| {}));
    }
}
