// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for error injection in streams.

use futures::Stream;
use slidewin_core::{SlidewinError, StreamItem};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream wrapper that injects an error at a specified position.
///
/// Values of the wrapped stream are emitted as `StreamItem::Value`; at position
/// `inject_error_at` (0-indexed) a `StreamItem::Error` is emitted instead, once.
///
/// # Examples
///
/// ```rust
/// use slidewin_test_utils::ErrorInjectingStream;
/// use slidewin_core::StreamItem;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let mut error_stream = ErrorInjectingStream::new(stream::iter(vec![1, 2, 3]), 1);
///
/// assert!(matches!(error_stream.next().await.unwrap(), StreamItem::Value(1)));
/// assert!(matches!(error_stream.next().await.unwrap(), StreamItem::Error(_)));
/// assert!(matches!(error_stream.next().await.unwrap(), StreamItem::Value(2)));
/// # }
/// ```
pub struct ErrorInjectingStream<S> {
    inner: S,
    inject_error_at: Option<usize>,
    count: usize,
}

impl<S> ErrorInjectingStream<S> {
    pub fn new(inner: S, inject_error_at: usize) -> Self {
        Self {
            inner,
            inject_error_at: Some(inject_error_at),
            count: 0,
        }
    }
}

impl<S> Stream for ErrorInjectingStream<S>
where
    S: Stream + Unpin,
{
    type Item = StreamItem<S::Item>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(error_pos) = self.inject_error_at {
            if self.count == error_pos {
                self.inject_error_at = None; // Only inject once
                self.count += 1;
                return Poll::Ready(Some(StreamItem::Error(SlidewinError::stream_error(
                    "Injected test error",
                ))));
            }
        }

        match Pin::new(&mut self.inner).poll_next(cx) {
            Poll::Ready(Some(item)) => {
                self.count += 1;
                Poll::Ready(Some(StreamItem::Value(item)))
            }
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}
