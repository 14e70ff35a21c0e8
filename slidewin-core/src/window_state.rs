// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The three-phase state machine shared by the iterator and stream adapters.
//!
//! Adapters feed it source events and forward whatever window it returns:
//!
//! | Phase       | `on_value`                           | `on_end`                          |
//! |-------------|--------------------------------------|-----------------------------------|
//! | `Filling`   | buffer; emit and go `Sliding` if full | emit partial window, `Exhausted` |
//! | `Sliding`   | evict oldest, buffer, emit           | `Exhausted`                       |
//! | `Exhausted` | ignored                              | nothing                           |
//!
//! A source failure (`on_error`) discards the buffer and moves straight to `Exhausted`.

use crate::window_buffer::WindowBuffer;
use crate::window_size::WindowSize;

/// Where a sliding window sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    /// Building the first window.
    Filling,
    /// Steady state, one element in and one out per pull.
    Sliding,
    /// Terminal. Nothing more is emitted.
    Exhausted,
}

/// Sliding window state: the working ring buffer plus the current phase.
#[derive(Debug, Clone)]
pub struct SlidingWindowState<T> {
    buffer: WindowBuffer<T>,
    phase: WindowPhase,
}

impl<T> SlidingWindowState<T> {
    #[must_use]
    pub fn new(size: WindowSize) -> Self {
        Self {
            buffer: WindowBuffer::new(size),
            phase: WindowPhase::Filling,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> WindowPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self.phase, WindowPhase::Exhausted)
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of elements currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Signals a source failure. Buffered elements are discarded.
    pub fn on_error(&mut self) {
        self.phase = WindowPhase::Exhausted;
        self.buffer.clear();
    }
}

impl<T: Clone> SlidingWindowState<T> {
    /// Feeds one source element. Returns the window to emit, if any.
    pub fn on_value(&mut self, value: T) -> Option<Vec<T>> {
        match self.phase {
            WindowPhase::Filling => {
                self.buffer.push(value);
                if self.buffer.is_full() {
                    self.phase = WindowPhase::Sliding;
                    Some(self.buffer.snapshot())
                } else {
                    None
                }
            }
            WindowPhase::Sliding => {
                self.buffer.push(value);
                Some(self.buffer.snapshot())
            }
            WindowPhase::Exhausted => None,
        }
    }

    /// Signals the end of the source.
    ///
    /// Emits the first window if it was never emitted (it may be partial or empty).
    pub fn on_end(&mut self) -> Option<Vec<T>> {
        let phase = self.phase;
        self.phase = WindowPhase::Exhausted;

        let window = match phase {
            WindowPhase::Filling => Some(self.buffer.snapshot()),
            WindowPhase::Sliding | WindowPhase::Exhausted => None,
        };
        self.buffer.clear();
        window
    }
}
