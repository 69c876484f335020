//! Classification rules paired with handlers.
//!
//! A [`Matcher`] is an inert descriptor: it recognizes one category of error
//! anywhere in a `source()` chain and knows which handler to run for it. The
//! two kinds are modelled as separate variants, so a sentinel matcher always
//! holds a real error value and a typed matcher always holds a real type.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::any::{type_name, TypeId};
use core::error::Error;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::ErrorChainExt;
use crate::types::BoxedError;

type SentinelHandler<'a> = dyn Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a;
type TypedHandler<'a> = dyn Fn(&(dyn Error + 'static)) -> Option<BoxedError> + Send + Sync + 'a;

/// Equality test against a single chain element.
pub(crate) trait SentinelRule: Send + Sync {
    fn matches(&self, candidate: &(dyn Error + 'static)) -> bool;

    fn describe(&self) -> String;
}

impl<S> SentinelRule for S
where
    S: Error + PartialEq + Send + Sync + 'static,
{
    #[inline]
    fn matches(&self, candidate: &(dyn Error + 'static)) -> bool {
        candidate.downcast_ref::<S>().is_some_and(|found| found == self)
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// Matches any `std::io::Error` in the chain with the given kind.
#[cfg(feature = "std")]
struct IoKind(std::io::ErrorKind);

#[cfg(feature = "std")]
impl SentinelRule for IoKind {
    fn matches(&self, candidate: &(dyn Error + 'static)) -> bool {
        candidate.downcast_ref::<std::io::Error>().is_some_and(|io| io.kind() == self.0)
    }

    fn describe(&self) -> String {
        format!("std::io::ErrorKind::{:?}", self.0)
    }
}

/// Which classification rule a [`Matcher`] uses.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    /// A specific error value, compared by type and equality.
    Sentinel,
    /// A concrete error type, compared by exact type identity.
    Typed,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => f.write_str("sentinel"),
            Self::Typed => f.write_str("typed"),
        }
    }
}

/// Plain-data summary of a matcher, suitable for logs and diagnostics.
///
/// `rule` is the sentinel's `Debug` form or the typed rule's type name.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatcherDescriptor {
    pub kind: MatcherKind,
    pub rule: String,
}

impl fmt::Display for MatcherDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.rule)
    }
}

/// Sentinel half of [`Matcher`]: a reusable error value and a handler that
/// receives the whole original error.
pub struct SentinelMatcher<'a> {
    rule: Box<dyn SentinelRule + 'a>,
    handler: Box<SentinelHandler<'a>>,
}

impl SentinelMatcher<'_> {
    /// Returns `true` if any element of the chain equals the sentinel.
    #[inline]
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        err.chain().any(|candidate| self.rule.matches(candidate))
    }

    /// Debug form of the sentinel value.
    pub fn rule(&self) -> String {
        self.rule.describe()
    }
}

/// Typed half of [`Matcher`]: a type witness and a handler adapted to pull
/// the typed value back out of the chain.
pub struct TypedMatcher<'a> {
    type_id: TypeId,
    type_name: &'static str,
    probe: fn(&(dyn Error + 'static)) -> bool,
    handler: Box<TypedHandler<'a>>,
}

impl TypedMatcher<'_> {
    /// Returns `true` if any element of the chain is exactly the target type.
    #[inline]
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        err.chain().any(self.probe)
    }

    /// `TypeId` of the target error type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Name of the target error type, as reported by [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

fn is_exactly<E: Error + 'static>(candidate: &(dyn Error + 'static)) -> bool {
    candidate.is::<E>()
}

/// A classification rule paired with a handler.
///
/// Build one with [`Matcher::on_sentinel`] or [`Matcher::on_type`] (or the
/// free functions [`on_sentinel`] and [`on_type`]). Matchers are immutable,
/// `Send + Sync`, and can be reused across any number of dispatch calls.
///
/// # Examples
///
/// ```
/// use error_switch::{Matcher, MatcherKind};
///
/// error_switch::sentinel!(Closed, "channel closed");
///
/// let matcher = Matcher::on_sentinel(Closed, |_| None);
/// assert_eq!(matcher.kind(), MatcherKind::Sentinel);
/// assert!(matcher.matches(&Closed));
/// ```
pub enum Matcher<'a> {
    Sentinel(SentinelMatcher<'a>),
    Typed(TypedMatcher<'a>),
}

impl<'a> Matcher<'a> {
    /// Creates a matcher that fires when `sentinel` appears anywhere in the chain.
    ///
    /// Chain elements are compared by downcasting to `S` and then using
    /// `PartialEq`, so a custom `PartialEq` impl controls what counts as equal.
    /// The handler receives the original, outermost error.
    pub fn on_sentinel<S, F>(sentinel: S, handler: F) -> Self
    where
        S: Error + PartialEq + Send + Sync + 'static,
        F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
    {
        Self::Sentinel(SentinelMatcher { rule: Box::new(sentinel), handler: Box::new(handler) })
    }

    /// Creates a matcher that fires when an error of exactly type `E` appears
    /// anywhere in the chain.
    ///
    /// The handler receives the first `E` found, outermost first.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_switch::{handle, Matcher, WrappedError};
    ///
    /// #[derive(Debug)]
    /// struct Status(u16);
    ///
    /// impl core::fmt::Display for Status {
    ///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    ///         write!(f, "status {}", self.0)
    ///     }
    /// }
    ///
    /// impl std::error::Error for Status {}
    ///
    /// let matcher = Matcher::on_type(|s: &Status| Some(format!("code {}", s.0).into()));
    /// let (matched, result) = handle(Some(WrappedError::new("fetch", Status(404))), &[matcher])
    ///     .into_parts();
    ///
    /// assert!(matched);
    /// assert_eq!(result.unwrap().to_string(), "code 404");
    /// ```
    pub fn on_type<E, F>(handler: F) -> Self
    where
        E: Error + 'static,
        F: Fn(&E) -> Option<BoxedError> + Send + Sync + 'a,
    {
        let adapted = move |err: &(dyn Error + 'static)| err.find_cause::<E>().and_then(&handler);
        Self::Typed(TypedMatcher {
            type_id: TypeId::of::<E>(),
            type_name: type_name::<E>(),
            probe: is_exactly::<E>,
            handler: Box::new(adapted),
        })
    }

    /// Creates a sentinel matcher that fires on any `std::io::Error` of `kind`.
    ///
    /// `std::io::Error` has no `PartialEq`, so its kind stands in for the
    /// sentinel value.
    #[cfg(feature = "std")]
    pub fn on_io_kind<F>(kind: std::io::ErrorKind, handler: F) -> Self
    where
        F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
    {
        Self::Sentinel(SentinelMatcher { rule: Box::new(IoKind(kind)), handler: Box::new(handler) })
    }

    #[inline]
    pub fn kind(&self) -> MatcherKind {
        match self {
            Self::Sentinel(_) => MatcherKind::Sentinel,
            Self::Typed(_) => MatcherKind::Typed,
        }
    }

    /// Tests this matcher's rule against every element of `err`'s chain.
    #[inline]
    pub fn matches(&self, err: &(dyn Error + 'static)) -> bool {
        match self {
            Self::Sentinel(sentinel) => sentinel.matches(err),
            Self::Typed(typed) => typed.matches(err),
        }
    }

    /// Runs the handler without testing the rule first.
    ///
    /// A typed matcher whose type is absent from the chain returns `None`.
    pub fn invoke(&self, err: BoxedError) -> Option<BoxedError> {
        match self {
            Self::Sentinel(sentinel) => (sentinel.handler)(err),
            Self::Typed(typed) => (typed.handler)(&*err),
        }
    }

    pub fn describe(&self) -> MatcherDescriptor {
        let rule = match self {
            Self::Sentinel(sentinel) => sentinel.rule(),
            Self::Typed(typed) => String::from(typed.type_name),
        };
        MatcherDescriptor { kind: self.kind(), rule }
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptor = self.describe();
        f.debug_struct("Matcher")
            .field("kind", &descriptor.kind)
            .field("rule", &descriptor.rule)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`Matcher::on_sentinel`].
#[inline]
pub fn on_sentinel<'a, S, F>(sentinel: S, handler: F) -> Matcher<'a>
where
    S: Error + PartialEq + Send + Sync + 'static,
    F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
{
    Matcher::on_sentinel(sentinel, handler)
}

/// Shorthand for [`Matcher::on_type`].
#[inline]
pub fn on_type<'a, E, F>(handler: F) -> Matcher<'a>
where
    E: Error + 'static,
    F: Fn(&E) -> Option<BoxedError> + Send + Sync + 'a,
{
    Matcher::on_type(handler)
}

/// Shorthand for [`Matcher::on_io_kind`].
#[cfg(feature = "std")]
#[inline]
pub fn on_io_kind<'a, F>(kind: std::io::ErrorKind, handler: F) -> Matcher<'a>
where
    F: Fn(BoxedError) -> Option<BoxedError> + Send + Sync + 'a,
{
    Matcher::on_io_kind(kind, handler)
}
