//! Dispatch variants as methods on `Result<T, E>`.
//!
//! `Ok` plays the part of the absent error: it passes through untouched and
//! no matcher is consulted.
//!
//! # Examples
//!
//! ```
//! use error_switch::{on_sentinel, HandleExt};
//!
//! error_switch::sentinel!(Empty, "queue empty");
//!
//! fn pop() -> Result<u32, Empty> {
//!     Err(Empty)
//! }
//!
//! let next = pop().recover_with(&[on_sentinel(Empty, |_| None)]);
//! assert!(matches!(next, Ok(None)));
//! ```

use crate::dispatch::{self, Handled};
use crate::types::{BoxedError, Matcher};

/// Extension trait that runs matchers against the error of a `Result`.
pub trait HandleExt<T, E> {
    /// Dispatches the error and reports the outcome as [`Handled`].
    fn handle_err(self, matchers: &[Matcher<'_>]) -> Result<T, Handled>;

    /// Dispatches the error, panicking if no matcher accepts it.
    ///
    /// `Ok(None)` means a handler suppressed the error; `Err` carries the
    /// handler's replacement error.
    ///
    /// # Panics
    ///
    /// Panics if the result is an error that no matcher accepts.
    fn must_handle_err(self, matchers: &[Matcher<'_>]) -> Result<Option<T>, BoxedError>;

    /// Dispatches the error, falling back to `default` (or suppression when
    /// `default` is `None`) if no matcher accepts it.
    fn handle_err_or<D>(
        self,
        default: Option<D>,
        matchers: &[Matcher<'_>],
    ) -> Result<Option<T>, BoxedError>
    where
        D: FnOnce(BoxedError) -> Option<BoxedError>;

    /// Dispatches the error and turns suppression into `Ok(None)`.
    ///
    /// Unmatched errors come back unchanged as `Err`.
    fn recover_with(self, matchers: &[Matcher<'_>]) -> Result<Option<T>, BoxedError>;
}

impl<T, E> HandleExt<T, E> for Result<T, E>
where
    E: Into<BoxedError>,
{
    #[inline]
    fn handle_err(self, matchers: &[Matcher<'_>]) -> Result<T, Handled> {
        self.map_err(|err| dispatch::handle(Some(err), matchers))
    }

    #[track_caller]
    fn must_handle_err(self, matchers: &[Matcher<'_>]) -> Result<Option<T>, BoxedError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) => suppressed_or_err(dispatch::must_handle(Some(err), matchers)),
        }
    }

    fn handle_err_or<D>(
        self,
        default: Option<D>,
        matchers: &[Matcher<'_>],
    ) -> Result<Option<T>, BoxedError>
    where
        D: FnOnce(BoxedError) -> Option<BoxedError>,
    {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) => suppressed_or_err(dispatch::handle_or(Some(err), default, matchers)),
        }
    }

    fn recover_with(self, matchers: &[Matcher<'_>]) -> Result<Option<T>, BoxedError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) => suppressed_or_err(dispatch::handle(Some(err), matchers).into_option()),
        }
    }
}

#[inline]
fn suppressed_or_err<T>(outcome: Option<BoxedError>) -> Result<Option<T>, BoxedError> {
    match outcome {
        Some(err) => Err(err),
        None => Ok(None),
    }
}
