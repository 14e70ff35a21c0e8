// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # slidewin
//!
//! Lazy sliding windows over iterators and async streams.
//!
//! Given a source and a window size `w`, slidewin produces every run of `w`
//! consecutive elements, advancing one element at a time. The output is pulled on
//! demand, each window is an independent `Vec`, and at least one window is always
//! produced: a source shorter than `w` yields a single partial window, an empty
//! source a single empty one.
//!
//! ## Quick Start
//!
//! ```rust
//! use slidewin::prelude::*;
//!
//! let windows: Vec<Vec<i32>> = vec![1, 2, 3, 4, 5].into_iter().sliding_window(2).unwrap().collect();
//! assert_eq!(windows, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5]]);
//! ```
//!
//! ## Streams
//!
//! ```rust,no_run
//! use slidewin::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut windows = stream::iter(1..=4).into_windowed_stream().sliding_window(3).unwrap();
//!
//!     while let Some(window) = windows.next().await {
//!         println!("{:?}", window.unwrap());
//!     }
//! }
//! ```
//!
//! ## Errors
//!
//! Invalid arguments (a zero or negative size, an absent source) are rejected when the
//! operator is created, before the source is touched. Failures of the source itself are
//! handed to the consumer unchanged and end the window sequence.

// Re-export core types
pub use slidewin_core::{
    sliding_window, try_sliding_window, Result, SlidewinError, SlidingWindowExt,
    SlidingWindowState, SlidingWindows, StreamItem, TrySlidingWindows, WindowBuffer,
    WindowPhase, WindowSize,
};

// Re-export the stream operator
pub use slidewin_stream::{
    sliding_window_stream, IntoWindowedStream, SlidingWindowStream, SlidingWindowStreamExt,
    TryIntoWindowedStream,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use slidewin_core::{SlidewinError, SlidingWindowExt, StreamItem, WindowSize};
    pub use slidewin_stream::{IntoWindowedStream, SlidingWindowStreamExt, TryIntoWindowedStream};
}
