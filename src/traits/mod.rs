//! Traits for walking error chains and dispatching from `Result` values.
//!
//! - [`ErrorChainExt`]: chain-aware "is" and "as" tests over `source()` links
//! - [`HandleExt`]: the dispatch variants as methods on `Result<T, E>`
//! - [`ResultExt`]: wrapping and boxing of `Result` errors
//!
//! # Examples
//!
//! ```
//! use error_switch::traits::{ErrorChainExt, ResultExt};
//!
//! error_switch::sentinel!(Exhausted, "quota exhausted");
//!
//! let result: Result<(), _> = Err(Exhausted).wrap_err("charging account");
//! let err = result.unwrap_err();
//!
//! assert_eq!(err.chain().count(), 2);
//! assert!(err.is_sentinel(&Exhausted));
//! ```

pub mod error_chain;
pub mod handle_ext;
pub mod result_ext;

pub use error_chain::{Chain, ErrorChainExt};
pub use handle_ext::HandleExt;
pub use result_ext::ResultExt;
