use super::Hook;
use crate::storage::{AtomicShared, Inline, Shared, Tracked};

/// Default policy: every contract violation is fatal.
///
/// Accessing the wrong side panics. Results are freely clonable and are not
/// tracked for inspection.
///
/// # Examples
///
/// ```should_panic
/// use expected_rail::Expected;
///
/// let failed: Expected<i32> = Expected::from_error("offline".to_string());
/// let _ = failed.value(); // panics
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Abort;

impl<T, E> Hook<T, E> for Abort {
    type Storage = Inline<T, E>;

    fn on_access_empty_value(error: Option<E>) -> T {
        match error {
            Some(_) => fatal("value accessed on an Expected holding an error"),
            None => fatal("value accessed on an empty Expected"),
        }
    }

    fn on_access_empty_error() -> E {
        fatal("error accessed on an Expected holding no error")
    }
}

/// Like [`Abort`], but results cannot be cloned and must be inspected
/// (through `has_value`, `has_error`, comparison, ...) before being dropped.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::MustCheck;
/// use expected_rail::Expected;
///
/// let saved = Expected::<u64, String, MustCheck>::from_value(512);
/// assert!(saved.has_value());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MustCheck;

impl<T, E> Hook<T, E> for MustCheck {
    type Storage = Tracked<T, E>;
    const ENABLE_COPY: bool = false;

    fn on_access_empty_value(error: Option<E>) -> T {
        <Abort as Hook<T, E>>::on_access_empty_value(error)
    }

    fn on_access_empty_error() -> E {
        <Abort as Hook<T, E>>::on_access_empty_error()
    }

    fn on_unchecked() {
        unchecked();
    }
}

/// Like [`Abort`], with the payload in a reference counted block shared by
/// clones. Dropping the last clone of a result nobody inspected panics.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::RcAbort;
/// use expected_rail::Expected;
///
/// let first = Expected::<i32, String, RcAbort>::from_value(1);
/// let second = first.clone();
/// assert_eq!(first.handle_count(), 2);
/// assert!(second.has_value()); // discharges the obligation for both
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RcAbort;

impl<T: Clone, E: Clone> Hook<T, E> for RcAbort {
    type Storage = Shared<T, E>;

    fn on_access_empty_value(error: Option<E>) -> T {
        <Abort as Hook<T, E>>::on_access_empty_value(error)
    }

    fn on_access_empty_error() -> E {
        <Abort as Hook<T, E>>::on_access_empty_error()
    }

    fn on_unchecked() {
        unchecked();
    }
}

/// [`RcAbort`] on an atomically reference counted block, so clones may be
/// sent to and dropped on other threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ArcAbort;

impl<T: Clone, E: Clone> Hook<T, E> for ArcAbort {
    type Storage = AtomicShared<T, E>;

    fn on_access_empty_value(error: Option<E>) -> T {
        <Abort as Hook<T, E>>::on_access_empty_value(error)
    }

    fn on_access_empty_error() -> E {
        <Abort as Hook<T, E>>::on_access_empty_error()
    }

    fn on_unchecked() {
        unchecked();
    }
}

fn unchecked() {
    // A second panic while unwinding would abort the process.
    if already_panicking() {
        return;
    }
    fatal("Expected released without its state being checked");
}

#[cold]
#[track_caller]
fn fatal(message: &'static str) -> ! {
    log_violation(message);
    panic!("{}", message)
}

#[cfg(feature = "tracing")]
fn log_violation(message: &'static str) {
    tracing::error!(target: "expected_rail", violation = message, "contract violation");
}

#[cfg(not(feature = "tracing"))]
fn log_violation(_message: &'static str) {}

#[cfg(feature = "std")]
fn already_panicking() -> bool {
    std::thread::panicking()
}

#[cfg(not(feature = "std"))]
fn already_panicking() -> bool {
    false
}
