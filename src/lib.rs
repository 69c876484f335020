//! First-match-wins error classification over `source()` chains.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_switch::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Sentinel and Typed Matchers
//!
//! ```
//! use error_switch::prelude::*;
//!
//! sentinel!(pub NotFound, "record not found");
//!
//! #[derive(Debug)]
//! struct HttpError {
//!     code: u16,
//! }
//!
//! impl core::fmt::Display for HttpError {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         write!(f, "http status {}", self.code)
//!     }
//! }
//!
//! impl std::error::Error for HttpError {}
//!
//! let matchers = [
//!     on_sentinel(NotFound, |_| None),
//!     on_type(|e: &HttpError| Some(format!("upstream failed with {}", e.code).into())),
//! ];
//!
//! let err = WrappedError::new("loading profile", HttpError { code: 503 });
//! let result = must_handle(Some(err), &matchers);
//! assert_eq!(result.unwrap().to_string(), "upstream failed with 503");
//!
//! let suppressed = must_handle(Some(WrappedError::new("lookup", NotFound)), &matchers);
//! assert!(suppressed.is_none());
//! ```
//!
//! ## Reporting Unmatched Errors
//!
//! ```
//! use error_switch::{handle, on_sentinel, Handled};
//!
//! error_switch::sentinel!(Timeout, "timed out");
//!
//! let outcome = handle(Some("disk full"), &[on_sentinel(Timeout, |_| None)]);
//! assert!(matches!(outcome, Handled::Unmatched(ref e) if e.to_string() == "disk full"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Internal logging and the `sentinel!` declaration macro
#[macro_use]
pub mod macros;

/// Core dispatch loop and its report/escalate/fallback variants
pub mod dispatch;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Chain inspection and `Result` integration traits
pub mod traits;
/// Matcher, matcher sets and the context wrapper error
pub mod types;

/// Async extensions for dispatching future errors (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

pub use dispatch::{handle, handle_or, handle_or_suppress, must_handle, Handled};
pub use traits::*;
pub use types::{
    on_sentinel, on_type, BoxedError, DescriptorVec, Matcher, MatcherDescriptor, MatcherKind,
    Matchers, SentinelMatcher, TypedMatcher, WrappedError,
};

#[cfg(feature = "std")]
pub use types::on_io_kind;
