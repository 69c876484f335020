//! Context wrapper that records an earlier error as its cause.

use alloc::borrow::Cow;
use core::error::Error;
use core::fmt;

use crate::types::BoxedError;

/// An error that adds a context message in front of the error it wraps.
///
/// Displays as `"{context}: {source}"` and reports the wrapped error from
/// [`Error::source`], so sentinel and typed matchers see straight through it.
///
/// # Examples
///
/// ```
/// use error_switch::{ErrorChainExt, WrappedError};
///
/// let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let err = WrappedError::new("opening config", inner);
///
/// assert_eq!(err.to_string(), "opening config: no such file");
/// assert!(err.find_cause::<std::io::Error>().is_some());
/// ```
#[derive(Debug)]
pub struct WrappedError {
    context: Cow<'static, str>,
    source: BoxedError,
}

impl WrappedError {
    pub fn new<C, E>(context: C, source: E) -> Self
    where
        C: Into<Cow<'static, str>>,
        E: Into<BoxedError>,
    {
        Self { context: context.into(), source: source.into() }
    }

    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns a reference to the wrapped error.
    #[inline]
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.source
    }

    /// Consumes the wrapper, returning the wrapped error.
    #[inline]
    pub fn into_source(self) -> BoxedError {
        self.source
    }
}

impl fmt::Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl Error for WrappedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        let source: &(dyn Error + 'static) = &*self.source;
        Some(source)
    }
}
