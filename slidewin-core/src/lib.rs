// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types for slidewin.
//!
//! - [`WindowSize`]: a validated, non-zero window size
//! - [`WindowBuffer`]: the fixed-capacity ring buffer windows are copied out of
//! - [`SlidingWindowState`]: the `Filling` / `Sliding` / `Exhausted` state machine
//! - [`SlidingWindows`] and [`TrySlidingWindows`]: iterator adapters built on it
//! - [`StreamItem`] and [`SlidewinError`]: shared item and error types

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod error;
pub mod sliding_windows;
pub mod stream_item;
pub mod window_buffer;
pub mod window_size;
pub mod window_state;

pub use self::error::{Result, SlidewinError};
pub use self::sliding_windows::{
    sliding_window, try_sliding_window, SlidingWindowExt, SlidingWindows, TrySlidingWindows,
};
pub use self::stream_item::StreamItem;
pub use self::window_buffer::WindowBuffer;
pub use self::window_size::WindowSize;
pub use self::window_state::{SlidingWindowState, WindowPhase};
