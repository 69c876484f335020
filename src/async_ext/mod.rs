//! Async extensions for error-switch.
//!
//! This module applies matchers to the error a future resolves to, with the
//! same semantics as the sync [`HandleExt`](crate::traits::HandleExt) trait.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! error-switch = { version = "0.3", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use error_switch::prelude::*;
//!
//! sentinel!(NotModified, "not modified");
//!
//! async fn fetch() -> Result<Vec<u8>, NotModified> {
//!     Err(NotModified)
//! }
//!
//! async fn refresh(matchers: &Matchers<'_>) -> Result<Option<Vec<u8>>, BoxedError> {
//!     fetch().handle_err_or(None::<fn(BoxedError) -> Option<BoxedError>>, matchers).await
//! }
//! ```

mod handle_future;

pub use handle_future::{FutureHandleExt, HandleFuture, HandleOrFuture};
