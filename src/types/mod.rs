//! Matcher types and the context wrapper error.
//!
//! # Examples
//!
//! ```
//! use error_switch::{Matchers, WrappedError};
//!
//! error_switch::sentinel!(Busy, "resource busy");
//!
//! let matchers = Matchers::new().on_sentinel(Busy, |_| Some("try again later".into()));
//! let err = WrappedError::new("acquiring lock", Busy);
//!
//! assert_eq!(matchers.position(&err), Some(0));
//! ```
use alloc::boxed::Box;
use smallvec::SmallVec;

pub mod matcher;
pub mod matcher_set;
pub mod wrapped;

pub use matcher::*;
pub use matcher_set::*;
pub use wrapped::*;

/// Owned, thread-safe error value flowing through dispatch.
///
/// Any `E: Error + Send + Sync + 'static`, as well as `&str` and `String`,
/// converts into it with `Into`.
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// SmallVec-backed list of matcher descriptors.
///
/// Uses inline storage for up to 4 elements, which covers typical call sites.
pub type DescriptorVec = SmallVec<[MatcherDescriptor; 4]>;
