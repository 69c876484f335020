//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_switch::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`sentinel!`]
//! - **Builders**: [`on_sentinel`], [`on_type`], [`Matchers`]
//! - **Dispatch**: [`handle`], [`must_handle`], [`handle_or`], [`handle_or_suppress`]
//! - **Types**: [`BoxedError`], [`Handled`], [`Matcher`], [`WrappedError`]
//! - **Traits**: [`ErrorChainExt`], [`HandleExt`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! sentinel!(Throttled, "request throttled");
//!
//! fn call() -> Result<&'static str, WrappedError> {
//!     Err(Throttled).wrap_err("calling billing api")
//! }
//!
//! let matchers = Matchers::new().on_sentinel(Throttled, |_| None);
//! assert!(matches!(call().recover_with(&matchers), Ok(None)));
//! ```

pub use crate::sentinel;

pub use crate::dispatch::{handle, handle_or, handle_or_suppress, must_handle, Handled};
pub use crate::types::{on_sentinel, on_type, BoxedError, Matcher, Matchers, WrappedError};

#[cfg(feature = "std")]
pub use crate::types::on_io_kind;

pub use crate::traits::{ErrorChainExt, HandleExt, ResultExt};

#[cfg(feature = "async")]
pub use crate::async_ext::FutureHandleExt;
