//! Declaration macros for sentinel errors, plus the crate-internal logging shim.
//!
//! - [`macro@crate::sentinel`] - Declares a zero-sized error type that acts as a
//!   reusable sentinel value. Two sentinels compare equal only when they are the
//!   same type, so a matcher never fires on a coincidental message match.
//!
//! # Examples
//!
//! ```
//! use error_switch::{sentinel, ErrorChainExt, WrappedError};
//!
//! sentinel!(
//!     /// Returned when the input ends before a complete frame was read.
//!     pub UnexpectedEof,
//!     "unexpected end of input"
//! );
//!
//! let err = WrappedError::new("reading header", UnexpectedEof);
//! assert!(err.is_sentinel(&UnexpectedEof));
//! assert_eq!(err.to_string(), "reading header: unexpected end of input");
//! ```

/// Declares a unit struct that implements [`Error`](core::error::Error) and can
/// be used as a sentinel with [`on_sentinel`](crate::on_sentinel).
///
/// The generated type derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and
/// `Hash`, displays as the given message and exposes it as `MESSAGE`.
///
/// # Syntax
///
/// - `sentinel!(Name, "message")`
/// - `sentinel!(#[attr] pub Name, "message")`
///
/// # Examples
///
/// ```
/// use error_switch::sentinel;
///
/// sentinel!(pub Canceled, "operation canceled");
///
/// assert_eq!(Canceled.to_string(), "operation canceled");
/// assert_eq!(Canceled::MESSAGE, "operation canceled");
/// ```
#[macro_export]
macro_rules! sentinel {
    ($(#[$meta:meta])* $vis:vis $name:ident, $message:literal $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Message shown by this sentinel's `Display` impl.
            #[allow(dead_code)]
            pub const MESSAGE: &'static str = $message;
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($message)
            }
        }

        impl ::core::error::Error for $name {}
    };
}

#[cfg(feature = "tracing")]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        ::tracing::$level!($($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {};
}
