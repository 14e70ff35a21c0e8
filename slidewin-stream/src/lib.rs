// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding windows over async streams.
//!
//! This crate adapts the `slidewin-core` state machine to [`futures::Stream`]:
//!
//! - **[`sliding_window`](SlidingWindowStreamExt::sliding_window)**: emits every run of
//!   `size` consecutive items, one item apart
//! - **[`sliding_window_stream`]**: the same operator over an optional source, validating
//!   both arguments up front
//! - **[`IntoWindowedStream`] / [`TryIntoWindowedStream`]**: lift plain and `Result`
//!   streams into streams of [`StreamItem`](slidewin_core::StreamItem)
//!
//! # Evaluation Model
//!
//! Windows are produced only while the consumer polls. Each poll pulls from the source
//! until the next window can be assembled, the source ends, or the source is pending.
//! Nothing is spawned and nothing is read ahead.
//!
//! # Logging
//!
//! With the `tracing` feature, source failures are reported through `tracing::warn!`.
//! Without it they go to standard error.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod into_windowed_stream;
pub mod sliding_window;

pub use into_windowed_stream::{IntoWindowedStream, TryIntoWindowedStream};
pub use sliding_window::{sliding_window_stream, SlidingWindowStream, SlidingWindowStreamExt};
