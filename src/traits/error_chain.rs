//! Walking an error's `source()` chain.
//!
//! [`ErrorChainExt`] gives every error, sized or `dyn`, the chain-aware
//! tests the matchers are built on:
//!
//! - [`is_sentinel`](ErrorChainExt::is_sentinel) looks for a value equal to a sentinel
//! - [`find_cause`](ErrorChainExt::find_cause) looks for a value of an exact type
//!
//! # Examples
//!
//! ```
//! use error_switch::{ErrorChainExt, WrappedError};
//!
//! let err = WrappedError::new("outer", WrappedError::new("middle", "root"));
//!
//! let messages: Vec<String> = err.chain().map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["outer: middle: root", "middle: root", "root"]);
//! assert_eq!(err.root_cause().to_string(), "root");
//! ```

use core::error::Error;
use core::iter::FusedIterator;

/// Iterator over an error and its transitive sources, outermost first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(head: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Chain-aware inspection for any error.
pub trait ErrorChainExt {
    /// Returns `self` as the head of its chain.
    fn as_chain_head(&self) -> &(dyn Error + 'static);

    /// Iterates `self`, then each `source()` in turn.
    #[inline]
    fn chain(&self) -> Chain<'_> {
        Chain::new(self.as_chain_head())
    }

    /// Returns `true` if any element of the chain is an `S` equal to `sentinel`.
    ///
    /// Elements of other types never match, even when their message is the same.
    fn is_sentinel<S>(&self, sentinel: &S) -> bool
    where
        S: Error + PartialEq + 'static,
    {
        self.chain().any(|candidate| candidate.downcast_ref::<S>() == Some(sentinel))
    }

    /// Returns the first element of the chain whose type is exactly `E`.
    fn find_cause<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.chain().find_map(|candidate| candidate.downcast_ref::<E>())
    }

    /// Returns the innermost error of the chain, which is `self` when it has no source.
    fn root_cause(&self) -> &(dyn Error + 'static) {
        let mut current = self.as_chain_head();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl<E: Error + 'static> ErrorChainExt for E {
    #[inline]
    fn as_chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + 'static {
    #[inline]
    fn as_chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + Send + 'static {
    #[inline]
    fn as_chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorChainExt for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_chain_head(&self) -> &(dyn Error + 'static) {
        self
    }
}
