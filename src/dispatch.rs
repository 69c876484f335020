//! First-match-wins dispatch of an error against an ordered list of matchers.
//!
//! [`handle`] is the core. It reports whether a matcher fired and what its
//! handler returned. The two other variants sit on top of it:
//!
//! - [`must_handle`] panics when nothing matches, for call sites that claim to
//!   enumerate every error category.
//! - [`handle_or`] falls back to a default handler, or suppresses the error
//!   when no default is given.
//!
//! Handlers run on the caller's thread and their panics are not caught.
//!
//! # Examples
//!
//! ```
//! use error_switch::{handle, handle_or, on_sentinel, WrappedError};
//!
//! error_switch::sentinel!(Eof, "end of stream");
//!
//! let matchers = [on_sentinel(Eof, |_| Some("stream closed".into()))];
//!
//! let (matched, result) = handle(Some(WrappedError::new("reading", Eof)), &matchers).into_parts();
//! assert!(matched);
//! assert_eq!(result.unwrap().to_string(), "stream closed");
//!
//! let fallback = handle_or(Some("socket reset"), Some(|e| Some(e)), &matchers);
//! assert_eq!(fallback.unwrap().to_string(), "socket reset");
//! ```

use core::any::type_name;
use core::error::Error;

use crate::types::{BoxedError, Matcher};

/// Outcome of [`handle`].
#[must_use]
#[derive(Debug)]
pub enum Handled {
    /// A matcher fired (or there was no error); holds the handler's result.
    Matched(Option<BoxedError>),
    /// No matcher fired; holds the original error, unchanged.
    Unmatched(BoxedError),
}

impl Handled {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    #[inline]
    pub fn is_unmatched(&self) -> bool {
        !self.is_matched()
    }

    /// Splits into `(matched, error)`. An unmatched outcome carries the original error.
    #[inline]
    pub fn into_parts(self) -> (bool, Option<BoxedError>) {
        match self {
            Self::Matched(result) => (true, result),
            Self::Unmatched(err) => (false, Some(err)),
        }
    }

    /// `Ok` with the handler's result, or `Err` with the unmatched original.
    #[inline]
    pub fn into_result(self) -> Result<Option<BoxedError>, BoxedError> {
        match self {
            Self::Matched(result) => Ok(result),
            Self::Unmatched(err) => Err(err),
        }
    }

    /// The handler's result, or the original error if nothing matched.
    #[inline]
    pub fn into_option(self) -> Option<BoxedError> {
        match self {
            Self::Matched(result) => result,
            Self::Unmatched(err) => Some(err),
        }
    }
}

/// Returns the first matcher, in list order, whose rule accepts `err`.
pub(crate) fn first_match<'m, 'a>(
    err: &(dyn Error + 'static),
    matchers: &'m [Matcher<'a>],
) -> Option<(usize, &'m Matcher<'a>)> {
    matchers.iter().enumerate().find(|(_, matcher)| matcher.matches(err))
}

fn dispatch_boxed(err: BoxedError, matchers: &[Matcher<'_>]) -> Handled {
    log_event!(trace, matchers = matchers.len(), "dispatching error");

    match first_match(&*err, matchers) {
        Some((_index, matcher)) => {
            log_event!(debug, index = _index, kind = %matcher.kind(), "matcher accepted error");
            Handled::Matched(matcher.invoke(err))
        },
        None => {
            log_event!(debug, error = %err, "no matcher accepted error");
            Handled::Unmatched(err)
        },
    }
}

/// Runs the first matcher that accepts `err` and reports the outcome.
///
/// - `None` is trivially handled: `Handled::Matched(None)`.
/// - Otherwise matchers are tried in order and the first match runs its
///   handler; later matchers are never consulted.
/// - If none match, the original error comes back as `Handled::Unmatched`.
///
/// # Examples
///
/// ```
/// use error_switch::{handle, on_sentinel, BoxedError};
///
/// error_switch::sentinel!(Gone, "gone");
///
/// let outcome = handle(None::<BoxedError>, &[on_sentinel(Gone, |_| None)]);
/// assert_eq!(outcome.into_parts().0, true);
/// ```
pub fn handle<E>(err: Option<E>, matchers: &[Matcher<'_>]) -> Handled
where
    E: Into<BoxedError>,
{
    match err {
        Some(err) => dispatch_boxed(err.into(), matchers),
        None => Handled::Matched(None),
    }
}

/// Like [`handle`], but treats an unmatched error as a bug.
///
/// # Panics
///
/// Panics with the error's type, `Display` and `Debug` forms if `err` is
/// present and no matcher accepts it.
#[track_caller]
pub fn must_handle<E>(err: Option<E>, matchers: &[Matcher<'_>]) -> Option<BoxedError>
where
    E: Into<BoxedError>,
{
    match handle(err, matchers) {
        Handled::Matched(result) => result,
        Handled::Unmatched(err) => unhandled(type_name::<E>(), &*err),
    }
}

#[cold]
#[track_caller]
fn unhandled(type_name: &str, err: &(dyn Error + Send + Sync + 'static)) -> ! {
    log_event!(error, error = %err, type_name, "unhandled error");
    panic!("unhandled error of type `{type_name}`: {err} ({err:?})")
}

/// Like [`handle`], but resolves an unmatched error with `default`.
///
/// With `default` set to `None`, an unmatched error is suppressed and `None`
/// is returned.
pub fn handle_or<E, D>(
    err: Option<E>,
    default: Option<D>,
    matchers: &[Matcher<'_>],
) -> Option<BoxedError>
where
    E: Into<BoxedError>,
    D: FnOnce(BoxedError) -> Option<BoxedError>,
{
    match handle(err, matchers) {
        Handled::Matched(result) => result,
        Handled::Unmatched(err) => match default {
            Some(default) => default(err),
            None => {
                log_event!(debug, error = %err, "suppressing unmatched error");
                None
            },
        },
    }
}

/// [`handle_or`] without a default handler: unmatched errors become `None`.
#[inline]
pub fn handle_or_suppress<E>(err: Option<E>, matchers: &[Matcher<'_>]) -> Option<BoxedError>
where
    E: Into<BoxedError>,
{
    handle_or(err, None::<fn(BoxedError) -> Option<BoxedError>>, matchers)
}
