use core::iter::FusedIterator;

/// Borrowing iterator over the value of an [`Expected`](crate::Expected).
///
/// Yields the value once if one is stored, and nothing otherwise.
///
/// # Examples
///
/// ```
/// use expected_rail::Expected;
///
/// let ok: Expected<i32> = Expected::from_value(3);
/// assert_eq!(ok.iter().copied().sum::<i32>(), 3);
///
/// let failed: Expected<i32> = Expected::from_error("nope".to_string());
/// assert_eq!(failed.iter().count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the value of an [`Expected`](crate::Expected),
/// returned by `into_iter` and [`Expected::drain`](crate::Expected::drain).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(inner: Option<T>) -> Self {
        Self { inner }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
