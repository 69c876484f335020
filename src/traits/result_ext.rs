//! Extension trait for wrapping `Result` errors with context.
//!
//! # Examples
//!
//! ```
//! use error_switch::traits::ResultExt;
//!
//! fn load(path: &str) -> Result<String, error_switch::WrappedError> {
//!     std::fs::read_to_string(path).wrap_err_with(|| format!("loading {path}"))
//! }
//!
//! let err = load("/definitely/not/here.toml").unwrap_err();
//! assert!(err.to_string().starts_with("loading /definitely/not/here.toml: "));
//! ```

use alloc::borrow::Cow;

use crate::types::{BoxedError, WrappedError};

/// Extension trait for wrapping or boxing the error of a `Result`.
pub trait ResultExt<T, E> {
    /// Wraps the error in a [`WrappedError`] carrying `context`.
    fn wrap_err<C>(self, context: C) -> Result<T, WrappedError>
    where
        C: Into<Cow<'static, str>>;

    /// Like [`wrap_err`](ResultExt::wrap_err), but only builds the context
    /// when the result is an error.
    fn wrap_err_with<C, F>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> C,
        C: Into<Cow<'static, str>>;

    /// Converts the error into a [`BoxedError`].
    fn into_boxed(self) -> Result<T, BoxedError>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxedError>,
{
    #[inline]
    fn wrap_err<C>(self, context: C) -> Result<T, WrappedError>
    where
        C: Into<Cow<'static, str>>,
    {
        self.map_err(|err| WrappedError::new(context, err))
    }

    #[inline]
    fn wrap_err_with<C, F>(self, f: F) -> Result<T, WrappedError>
    where
        F: FnOnce() -> C,
        C: Into<Cow<'static, str>>,
    {
        self.map_err(|err| WrappedError::new(f(), err))
    }

    #[inline]
    fn into_boxed(self) -> Result<T, BoxedError> {
        self.map_err(Into::into)
    }
}
