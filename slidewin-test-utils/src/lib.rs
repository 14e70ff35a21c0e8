// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the slidewin workspace.
//!
//! This crate is for development and testing only.
//!
//! - **Channels**: [`test_channel`] and [`test_channel_with_errors`] give tests a sender
//!   to push items imperatively while the operator under test consumes the stream
//! - **Assertions**: [`helpers`] wraps the usual "next item within a timeout" checks
//! - **Instrumented sources**: [`sources`] counts pulls, observes when a source is
//!   released, and fails on demand
//! - **Error injection**: [`ErrorInjectingStream`] drops a `StreamItem::Error` into a
//!   stream at a chosen position
//!
//! # Example
//!
//! ```rust
//! use slidewin_test_utils::sources::CountingIter;
//!
//! let (mut source, pulls) = CountingIter::new(1..);
//! source.next();
//! source.next();
//! assert_eq!(pulls.get(), 2);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error_injection;
pub mod helpers;
pub mod sources;

use futures::{Stream, StreamExt};
use slidewin_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use error_injection::ErrorInjectingStream;
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use sources::{CountingIter, DropProbe, FailingIter, PullCount, ReleaseFlag};

/// Creates a test channel that automatically wraps values in `StreamItem::Value`.
///
/// # Example
///
/// ```rust
/// use slidewin_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
///
/// tx.send(42).unwrap();
///
/// let item = stream.next().await.unwrap().unwrap(); // Option -> StreamItem -> Value
/// assert_eq!(item, 42);
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>` for testing error propagation.
///
/// # Example
///
/// ```rust
/// use slidewin_test_utils::test_channel_with_errors;
/// use slidewin_core::{SlidewinError, StreamItem};
///
/// let (tx, _stream) = test_channel_with_errors::<i32>();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(SlidewinError::stream_error("test error"))).unwrap();
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
