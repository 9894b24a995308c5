use super::Hook;
use crate::storage::Tracked;

/// Policy that never fails: wrong-side accesses hand out `Default::default()`
/// and flavor flips on locked instances are silently ignored.
///
/// The default constructor is enabled, so results can start out empty and be
/// assigned later.
///
/// # Examples
///
/// ```
/// use expected_rail::hook::Minimal;
/// use expected_rail::Expected;
///
/// let failed = Expected::<i32, String, Minimal>::from_error("offline".to_string());
/// assert_eq!(failed.value(), 0);
///
/// let ok = Expected::<i32, String, Minimal>::from_value(5);
/// assert_eq!(ok.error(), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Minimal;

impl<T: Default, E: Default> Hook<T, E> for Minimal {
    type Storage = Tracked<T, E>;
    const ENABLE_DEFAULT_CONSTRUCTOR: bool = true;

    #[inline]
    fn on_access_empty_value(_error: Option<E>) -> T {
        T::default()
    }

    #[inline]
    fn on_access_empty_error() -> E {
        E::default()
    }

    #[inline]
    fn on_flavor_change() {}
}
