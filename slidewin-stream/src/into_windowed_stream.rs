// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversions from plain streams into streams of [`StreamItem`].
//!
//! The window operator consumes `Stream<Item = StreamItem<T>>`. These helpers lift
//! ordinary streams into that shape.
//!
//! ```rust
//! use slidewin_stream::{IntoWindowedStream, SlidingWindowStreamExt, TryIntoWindowedStream};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let values = stream::iter(vec![1, 2, 3]).into_windowed_stream();
//! let results = stream::iter(vec![Ok(1), Err(std::io::Error::other("read failed"))])
//!     .try_into_windowed_stream();
//!
//! let mut windows = values.sliding_window(2).unwrap();
//! assert_eq!(windows.next().await.unwrap().unwrap(), vec![1, 2]);
//!
//! let mut windows = results.sliding_window(2).unwrap();
//! assert!(windows.next().await.unwrap().is_error());
//! # }
//! ```

use futures::stream::Map;
use futures::{Stream, StreamExt};
use slidewin_core::{SlidewinError, StreamItem};
use std::error::Error;

/// Wraps every item of a plain stream in `StreamItem::Value`.
pub trait IntoWindowedStream: Stream + Sized {
    #[allow(clippy::type_complexity)]
    fn into_windowed_stream(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item>> {
        self.map(StreamItem::Value as fn(Self::Item) -> StreamItem<Self::Item>)
    }
}

impl<S: Stream> IntoWindowedStream for S {}

/// Converts a stream of `Result` into a stream of [`StreamItem`].
///
/// `Ok` becomes `StreamItem::Value`; `Err` is wrapped with [`SlidewinError::user_error`].
pub trait TryIntoWindowedStream<T, E>: Stream<Item = Result<T, E>> + Sized
where
    E: Error + Send + Sync + 'static,
{
    #[allow(clippy::type_complexity)]
    fn try_into_windowed_stream(self) -> Map<Self, fn(Result<T, E>) -> StreamItem<T>> {
        self.map(into_stream_item as fn(Result<T, E>) -> StreamItem<T>)
    }
}

impl<S, T, E> TryIntoWindowedStream<T, E> for S
where
    S: Stream<Item = Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
}

fn into_stream_item<T, E>(result: Result<T, E>) -> StreamItem<T>
where
    E: Error + Send + Sync + 'static,
{
    match result {
        Ok(value) => StreamItem::Value(value),
        Err(error) => StreamItem::Error(SlidewinError::user_error(error)),
    }
}
