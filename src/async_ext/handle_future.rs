//! Future wrappers that dispatch the inner future's error.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::dispatch::{self, Handled};
use crate::types::{BoxedError, Matcher};

pin_project! {
    /// Future returned by [`FutureHandleExt::handle_err`].
    ///
    /// Resolves to `Ok` untouched, or to `Err(Handled)` once the inner error
    /// has been dispatched.
    #[must_use = "futures do nothing unless polled"]
    pub struct HandleFuture<'m, 'a, Fut> {
        #[pin]
        future: Fut,
        matchers: &'m [Matcher<'a>],
    }
}

impl<'m, 'a, Fut> HandleFuture<'m, 'a, Fut> {
    #[inline]
    pub fn new(future: Fut, matchers: &'m [Matcher<'a>]) -> Self {
        Self { future, matchers }
    }
}

impl<Fut, T, E> Future for HandleFuture<'_, '_, Fut>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxedError>,
{
    type Output = Result<T, Handled>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let matchers = *this.matchers;

        this.future.poll(cx).map(|res| res.map_err(|err| dispatch::handle(Some(err), matchers)))
    }
}

impl<Fut, T, E> FusedFuture for HandleFuture<'_, '_, Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
    E: Into<BoxedError>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

pin_project! {
    /// Future returned by [`FutureHandleExt::handle_err_or`].
    ///
    /// `Ok(Some(value))` on success, `Ok(None)` when the error was suppressed,
    /// `Err` with a replacement error otherwise.
    ///
    /// # Cancel Safety
    ///
    /// Cancel-safe if the inner future is. The default handler is only taken
    /// when the inner future resolves to an error.
    #[must_use = "futures do nothing unless polled"]
    pub struct HandleOrFuture<'m, 'a, Fut, D> {
        #[pin]
        future: Fut,
        default: Option<D>,
        matchers: &'m [Matcher<'a>],
        done: bool,
    }
}

impl<'m, 'a, Fut, D> HandleOrFuture<'m, 'a, Fut, D> {
    #[inline]
    pub fn new(future: Fut, default: Option<D>, matchers: &'m [Matcher<'a>]) -> Self {
        Self { future, default, matchers, done: false }
    }
}

impl<Fut, D, T, E> Future for HandleOrFuture<'_, '_, Fut, D>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxedError>,
    D: FnOnce(BoxedError) -> Option<BoxedError>,
{
    type Output = Result<Option<T>, BoxedError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let output = match this.future.poll(cx) {
            Poll::Ready(output) => output,
            Poll::Pending => return Poll::Pending,
        };
        *this.done = true;

        Poll::Ready(match output {
            Ok(value) => Ok(Some(value)),
            Err(err) => match dispatch::handle_or(Some(err), this.default.take(), *this.matchers) {
                Some(replacement) => Err(replacement),
                None => Ok(None),
            },
        })
    }
}

impl<Fut, D, T, E> FusedFuture for HandleOrFuture<'_, '_, Fut, D>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxedError>,
    D: FnOnce(BoxedError) -> Option<BoxedError>,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

/// Extension trait for dispatching the error of a `Result`-returning future.
///
/// Mirrors [`HandleExt`](crate::traits::HandleExt) for async code.
///
/// # Examples
///
/// ```
/// use error_switch::prelude::*;
///
/// sentinel!(Retry, "retry later");
///
/// async fn example() {
///     let matchers = [on_sentinel(Retry, |_| Some("gave up".into()))];
///     let result = async { Err::<(), _>(Retry) }.handle_err(&matchers).await;
///
///     let replacement = result.unwrap_err().into_option().unwrap();
///     assert_eq!(replacement.to_string(), "gave up");
/// }
/// ```
pub trait FutureHandleExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Dispatches the error once the future resolves.
    fn handle_err<'m, 'a>(self, matchers: &'m [Matcher<'a>]) -> HandleFuture<'m, 'a, Self> {
        HandleFuture::new(self, matchers)
    }

    /// Dispatches the error once the future resolves, falling back to
    /// `default` (or suppression) when nothing matches.
    fn handle_err_or<'m, 'a, D>(
        self,
        default: Option<D>,
        matchers: &'m [Matcher<'a>],
    ) -> HandleOrFuture<'m, 'a, Self, D>
    where
        D: FnOnce(BoxedError) -> Option<BoxedError>,
    {
        HandleOrFuture::new(self, default, matchers)
    }
}

impl<Fut, T, E> FutureHandleExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
