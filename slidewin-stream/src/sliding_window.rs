// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding window operator for streams.
//!
//! This module provides the [`sliding_window`](SlidingWindowStreamExt::sliding_window)
//! operator, which emits every run of `size` consecutive items, advancing one item
//! at a time.
//!
//! # Overview
//!
//! The first window is emitted as soon as `size` items have arrived, or when the
//! source completes early (possibly partial, possibly empty). From then on every
//! incoming item yields a new window: the previous one minus its oldest item, plus
//! the new item. Each window is a freshly allocated `Vec`.
//!
//! # Basic Usage
//!
//! ```
//! use slidewin_stream::SlidingWindowStreamExt;
//! use slidewin_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, stream) = test_channel::<i32>();
//! let mut windows = stream.sliding_window(2).unwrap();
//!
//! tx.send(1).unwrap();
//! tx.send(2).unwrap(); // First window complete
//! tx.send(3).unwrap();
//! drop(tx);
//!
//! assert_eq!(windows.next().await.unwrap().unwrap(), vec![1, 2]);
//! assert_eq!(windows.next().await.unwrap().unwrap(), vec![2, 3]);
//! assert!(windows.next().await.is_none());
//! # }
//! ```
//!
//! # Error Handling
//!
//! A `StreamItem::Error` from the source is forwarded as-is and ends the window
//! stream. The source is dropped before the error is returned, and any buffered
//! partial window is discarded.

use core::fmt;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use slidewin_core::{
    Result, SlidewinError, SlidingWindowState, StreamItem, WindowPhase, WindowSize,
};

/// Extension trait providing the [`sliding_window`](Self::sliding_window) operator.
///
/// Implemented for all streams of [`StreamItem<T>`] where `T: Clone`.
pub trait SlidingWindowStreamExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Emits overlapping windows of `size` consecutive items.
    ///
    /// # Behavior
    ///
    /// - **Values**: Buffered until `size` have arrived, then one window per item
    /// - **Completion**: If no window was emitted yet, the partial (or empty) buffer is
    ///   emitted as the only window
    /// - **Errors**: Forwarded unchanged, then the stream ends
    ///
    /// # Errors
    ///
    /// Returns [`SlidewinError::InvalidArgument`] when `size` is zero. The source is
    /// not polled.
    ///
    /// # Examples
    ///
    /// ## Short Source
    ///
    /// ```rust
    /// use slidewin_stream::{IntoWindowedStream, SlidingWindowStreamExt};
    /// use futures::{stream, StreamExt};
    ///
    /// # async fn example() {
    /// let mut windows = stream::iter(vec![1, 2, 3])
    ///     .into_windowed_stream()
    ///     .sliding_window(5)
    ///     .unwrap();
    ///
    /// assert_eq!(windows.next().await.unwrap().unwrap(), vec![1, 2, 3]);
    /// assert!(windows.next().await.is_none());
    /// # }
    /// ```
    ///
    /// # Performance
    ///
    /// - O(1) buffer update per item (ring buffer)
    /// - O(size) copy per emitted window
    fn sliding_window(self, size: usize) -> Result<SlidingWindowStream<Self, T>>;
}

impl<S, T> SlidingWindowStreamExt<T> for S
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    fn sliding_window(self, size: usize) -> Result<SlidingWindowStream<Self, T>> {
        let size = WindowSize::new(size)?;
        Ok(SlidingWindowStream::new(self, size))
    }
}

/// Creates a sliding window stream over an optional source.
///
/// # Errors
///
/// Returns [`SlidewinError::InvalidArgument`] when `source` is `None` or `size <= 0`.
///
/// # Examples
///
/// ```rust
/// use slidewin_stream::sliding_window_stream;
/// use slidewin_core::StreamItem;
/// use futures::stream;
///
/// let missing: Option<stream::Iter<std::vec::IntoIter<StreamItem<i32>>>> = None;
/// assert!(sliding_window_stream(missing, 3).unwrap_err().is_invalid_argument());
///
/// let source = stream::iter(vec![StreamItem::Value(1)]);
/// assert!(sliding_window_stream(Some(source), 0).unwrap_err().is_invalid_argument());
/// ```
pub fn sliding_window_stream<S, T>(source: Option<S>, size: i64) -> Result<SlidingWindowStream<S, T>>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    let source = source
        .ok_or_else(|| SlidewinError::invalid_argument("source", "source stream is absent"))?;
    let size = WindowSize::try_from(size)?;
    Ok(SlidingWindowStream::new(source, size))
}

/// Stream of sliding windows over `S`.
///
/// Owns the source and drops it on completion, on the first error, or when this
/// stream is dropped.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct SlidingWindowStream<S, T> {
    #[pin]
    source: Option<S>,
    state: SlidingWindowState<T>,
}

impl<S, T> SlidingWindowStream<S, T>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    /// Wraps `source` without polling it.
    pub fn new(source: S, size: WindowSize) -> Self {
        Self {
            source: Some(source),
            state: SlidingWindowState::new(size),
        }
    }
}

impl<S, T> SlidingWindowStream<S, T> {
    #[must_use]
    pub const fn phase(&self) -> WindowPhase {
        self.state.phase()
    }

    /// `true` while the stream still holds its source.
    #[must_use]
    pub const fn holds_source(&self) -> bool {
        self.source.is_some()
    }
}

impl<S, T> fmt::Debug for SlidingWindowStream<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlidingWindowStream")
            .field("window_size", &self.state.window_size())
            .field("phase", &self.state.phase())
            .field("holds_source", &self.source.is_some())
            .finish_non_exhaustive()
    }
}

impl<S, T> Stream for SlidingWindowStream<S, T>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    type Item = StreamItem<Vec<T>>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            let Some(source) = this.source.as_mut().as_pin_mut() else {
                return Poll::Ready(None);
            };

            match source.poll_next(cx) {
                Poll::Ready(Some(StreamItem::Value(value))) => {
                    if let Some(window) = this.state.on_value(value) {
                        return Poll::Ready(Some(StreamItem::Value(window)));
                    }
                }
                Poll::Ready(Some(StreamItem::Error(error))) => {
                    warn!("sliding_window: source failed, ending stream: {}", error);
                    this.source.set(None);
                    this.state.on_error();
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                Poll::Ready(None) => {
                    this.source.set(None);
                    return Poll::Ready(this.state.on_end().map(StreamItem::Value));
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.source, self.state.phase()) {
            (None, _) | (_, WindowPhase::Exhausted) => (0, Some(0)),
            // At least the first window is still owed, unless the source fails.
            (Some(source), WindowPhase::Filling) => {
                let (_, upper) = source.size_hint();
                let first = |remaining: usize| {
                    remaining
                        .checked_add(self.state.buffered() + 1)
                        .map(|total| total.saturating_sub(self.state.window_size()).max(1))
                };
                (0, upper.and_then(first))
            }
            (Some(source), WindowPhase::Sliding) => (0, source.size_hint().1),
        }
    }
}

impl<S, T> FusedStream for SlidingWindowStream<S, T>
where
    S: Stream<Item = StreamItem<T>>,
    T: Clone,
{
    fn is_terminated(&self) -> bool {
        self.source.is_none()
    }
}
