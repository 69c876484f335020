//! Reusable, ordered collections of matchers.

use core::error::Error;
use core::fmt;
use core::ops::Deref;

use smallvec::SmallVec;

use crate::dispatch::{self, Handled};
use crate::types::{BoxedError, DescriptorVec, Matcher};

/// Ordered list of [`Matcher`]s, evaluated first-match-wins.
///
/// Holds up to four matchers inline before spilling to the heap. Dereferences
/// to `[Matcher]`, so it can be passed anywhere a matcher slice is expected.
///
/// # Examples
///
/// ```
/// use error_switch::{Handled, Matchers, WrappedError};
///
/// error_switch::sentinel!(Conflict, "version conflict");
///
/// #[derive(Debug)]
/// struct Invalid(&'static str);
///
/// impl core::fmt::Display for Invalid {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "invalid field {}", self.0)
///     }
/// }
///
/// impl std::error::Error for Invalid {}
///
/// let matchers = Matchers::new()
///     .on_sentinel(Conflict, |_| Some("retry with fresh version".into()))
///     .on_type(|e: &Invalid| Some(format!("bad request: {}", e.0).into()));
///
/// let outcome = matchers.handle(Some(WrappedError::new("saving", Invalid("email"))));
/// assert_eq!(outcome.into_option().unwrap().to_string(), "bad request: email");
/// ```
#[derive(Default)]
pub struct Matchers<'a> {
    inner: SmallVec<[Matcher<'a>; 4]>,
}

impl<'a> Matchers<'a> {
    #[inline]
    pub fn new() -> Self {
        Self { inner: SmallVec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: SmallVec::with_capacity(capacity) }
    }

    /// Appends a matcher at the lowest priority.
    #[inline]
    pub fn push(&mut self, matcher: Matcher<'a>) {
        self.inner.push(matcher);
    }

    /// Builder form of [`Matcher::on_sentinel`].
    pub fn on_sentinel<S, F>(mut self, sentinel: S, handler: F) -> Self
    where
        S: Error + PartialEq + Send + Sync + 'static,
        F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
    {
        self.push(Matcher::on_sentinel(sentinel, handler));
        self
    }

    /// Builder form of [`Matcher::on_type`].
    pub fn on_type<E, F>(mut self, handler: F) -> Self
    where
        E: Error + 'static,
        F: Fn(&E) -> Option<BoxedError> + Send + Sync + 'a,
    {
        self.push(Matcher::on_type(handler));
        self
    }

    /// Builder form of [`Matcher::on_io_kind`].
    #[cfg(feature = "std")]
    pub fn on_io_kind<F>(mut self, kind: std::io::ErrorKind, handler: F) -> Self
    where
        F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
    {
        self.push(Matcher::on_io_kind(kind, handler));
        self
    }

    /// Index of the matcher that [`handle`](Self::handle) would run for `err`.
    #[inline]
    pub fn position(&self, err: &(dyn Error + 'static)) -> Option<usize> {
        dispatch::first_match(err, &self.inner).map(|(index, _)| index)
    }

    pub fn descriptors(&self) -> DescriptorVec {
        self.inner.iter().map(Matcher::describe).collect()
    }

    /// See [`dispatch::handle`].
    #[inline]
    pub fn handle<E>(&self, err: Option<E>) -> Handled
    where
        E: Into<BoxedError>,
    {
        dispatch::handle(err, &self.inner)
    }

    /// See [`dispatch::must_handle`].
    ///
    /// # Panics
    ///
    /// Panics if `err` is present and no matcher accepts it.
    #[inline]
    #[track_caller]
    pub fn must_handle<E>(&self, err: Option<E>) -> Option<BoxedError>
    where
        E: Into<BoxedError>,
    {
        dispatch::must_handle(err, &self.inner)
    }

    /// See [`dispatch::handle_or`].
    #[inline]
    pub fn handle_or<E, D>(&self, err: Option<E>, default: Option<D>) -> Option<BoxedError>
    where
        E: Into<BoxedError>,
        D: FnOnce(BoxedError) -> Option<BoxedError>,
    {
        dispatch::handle_or(err, default, &self.inner)
    }

    /// See [`dispatch::handle_or_suppress`].
    #[inline]
    pub fn handle_or_suppress<E>(&self, err: Option<E>) -> Option<BoxedError>
    where
        E: Into<BoxedError>,
    {
        dispatch::handle_or_suppress(err, &self.inner)
    }
}

impl<'a> Deref for Matchers<'a> {
    type Target = [Matcher<'a>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl fmt::Debug for Matchers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl<'a> FromIterator<Matcher<'a>> for Matchers<'a> {
    fn from_iter<I: IntoIterator<Item = Matcher<'a>>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<'a> Extend<Matcher<'a>> for Matchers<'a> {
    fn extend<I: IntoIterator<Item = Matcher<'a>>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<'a, 'm> IntoIterator for &'m Matchers<'a> {
    type Item = &'m Matcher<'a>;
    type IntoIter = core::slice::Iter<'m, Matcher<'a>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for Matchers<'a> {
    type Item = Matcher<'a>;
    type IntoIter = smallvec::IntoIter<[Matcher<'a>; 4]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, const N: usize> From<[Matcher<'a>; N]> for Matchers<'a> {
    fn from(matchers: [Matcher<'a>; N]) -> Self {
        matchers.into_iter().collect()
    }
}
