use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot::{channel, Receiver, Sender};

use crate::optional::Optional;

/// Creates a connected handle/future pair for a value produced later.
pub fn pair<T>() -> (DeferredHandle<T>, Deferred<T>) {
    let (sender, receiver) = channel();

    (DeferredHandle { sender }, Deferred { receiver })
}

/// A computation whose value becomes available once its
/// [handle](DeferredHandle) completes it.
///
/// Awaiting suspends the current task cooperatively. The future resolves to
/// [`Some`](Optional::Some) with the completed value, or to
/// [`None`](Optional::None) if the handle was dropped unfulfilled.
pub struct Deferred<T> {
    receiver: Receiver<T>,
}

impl<T> Future for Deferred<T> {
    type Output = Optional<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|completed| match completed {
            Ok(value) => Optional::Some(value),
            Err(_) => Optional::None,
        })
    }
}

/// The completing side of a [`Deferred`] computation.
pub struct DeferredHandle<T> {
    sender: Sender<T>,
}

impl<T> DeferredHandle<T> {
    /// Completes the paired future with the given value, consuming the
    /// handle.
    pub fn complete(self, value: T) {
        let _ = self.sender.send(value);
    }
}

#[cfg(test)]
mod tests {
    use super::pair;
    use crate::optional::Optional;
    use crate::result::Result;

    #[tokio::test]
    async fn completes_with_the_provided_value() {
        let (handle, deferred) = pair();

        handle.complete(5);

        assert_eq!(deferred.await, Optional::Some(5));
    }

    #[tokio::test]
    async fn resolves_to_none_when_the_handle_is_dropped() {
        let (handle, deferred) = pair::<i32>();

        drop(handle);

        assert!(deferred.await.is_none());
    }

    #[tokio::test]
    async fn chains_into_a_deferred_result() {
        let (handle, deferred) = pair();

        tokio::spawn(async move {
            handle.complete(40);
        });

        let chained = Result::<i32, &str>::Ok(2)
            .flat_map_async(|n| async move {
                deferred.await.match_with(|value| Result::Ok(value + n), || Result::Err("cancelled"))
            })
            .await;

        assert_eq!(chained, Result::Ok(42));
    }
}
